use std::{fmt, iter};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::{InvalidGridSizeError, OutOfBoundsError, Position, SetTileError};

use super::{
    placement::Placement,
    tile_space::{EMPTY_MARKER, TileSpace},
};

/// Side length of a standard board.
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Square board of [`TileSpace`] cells.
///
/// Cells are stored column by column and indexed `[x][y]`: `cells[x]` is the
/// column at `x`, `cells[x][y]` the cell `y` rows down from the top.
/// `Clone` produces a fully independent copy, which is what scratch grids used
/// for validation rely on.
///
/// # Example
///
/// ```
/// use wordgrid_engine::Grid;
///
/// let mut grid = Grid::new(3).unwrap();
/// grid.set(1, 0, 'a').unwrap();
/// let lines = grid.render().collect::<Vec<_>>();
/// assert_eq!(lines, [" A ", "", "   ", "", "   ", ""]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<TileSpace>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty(DEFAULT_GRID_SIZE)
    }
}

impl Grid {
    pub fn new(size: usize) -> Result<Self, InvalidGridSizeError> {
        if size == 0 {
            return Err(InvalidGridSizeError { size });
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![TileSpace::EMPTY; size]; size],
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), OutOfBoundsError> {
        if self.contains(Position::new(x, y)) {
            Ok(())
        } else {
            Err(OutOfBoundsError {
                x,
                y,
                size: self.size,
            })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<&TileSpace, OutOfBoundsError> {
        self.check_bounds(x, y)?;
        Ok(&self.cells[x][y])
    }

    /// Writes a single ASCII letter, stored uppercase.
    pub fn set(&mut self, x: usize, y: usize, letter: char) -> Result<(), SetTileError> {
        self.check_bounds(x, y)?;
        self.cells[x][y].set_contents(letter)?;
        Ok(())
    }

    /// Writes every letter of `placement` onto its cell.
    ///
    /// All target cells are checked before the first write, so on error the
    /// grid is unchanged.
    pub fn write_word(&mut self, placement: &Placement) -> Result<(), OutOfBoundsError> {
        for (pos, _) in placement.tiles() {
            self.check_bounds(pos.x, pos.y)?;
        }
        for (pos, letter) in placement.tiles() {
            self.cells[pos.x][pos.y].set_contents_unchecked(letter);
        }
        Ok(())
    }

    /// Concatenated contents of row `y`, read left to right.
    pub fn row_line(&self, y: usize) -> Result<String, OutOfBoundsError> {
        self.check_bounds(0, y)?;
        Ok(self.row_chars(y))
    }

    /// Concatenated contents of column `x`, read top to bottom.
    pub fn column_line(&self, x: usize) -> Result<String, OutOfBoundsError> {
        self.check_bounds(x, 0)?;
        Ok(self.column_chars(x))
    }

    fn row_chars(&self, y: usize) -> String {
        self.cells.iter().map(|column| column[y].as_char()).collect()
    }

    fn column_chars(&self, x: usize) -> String {
        self.cells[x].iter().map(|tile| tile.as_char()).collect()
    }

    /// Every row followed by every column, as lines of cell characters.
    ///
    /// Empty cells appear as [`EMPTY_MARKER`], so splitting a line on it yields
    /// the runs of adjacent letters.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let rows = (0..self.size).map(move |y| self.row_chars(y));
        let columns = (0..self.size).map(move |x| self.column_chars(x));
        rows.chain(columns)
    }

    /// Text rendering of the grid, one board row per line.
    ///
    /// Line `t` is built from the `t`-th cell of every column, and each board
    /// row is followed by a blank separator line. Calling this again starts a
    /// fresh iteration.
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.size).flat_map(move |t| {
            let row = (0..self.size)
                .map(|l| self.cells[l][t].as_char())
                .collect::<String>();
            iter::once(row).chain(iter::once(String::new()))
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Serialized as the list of row lines, top to bottom.
impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq((0..self.size).map(|y| self.row_chars(y)))
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<String>::deserialize(deserializer)?;
        let mut grid = Grid::new(rows.len()).map_err(D::Error::custom)?;
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != grid.size {
                return Err(D::Error::custom(format!(
                    "row {y} has {len} cells, expected {}",
                    grid.size
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                if ch != EMPTY_MARKER {
                    grid.set(x, y, ch).map_err(D::Error::custom)?;
                }
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, InvalidLetterError, Word};

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(DEFAULT_GRID_SIZE).unwrap();
        assert_eq!(grid.size(), 15);
        assert_eq!(grid.cells.len(), 15);
        for column in &grid.cells {
            assert_eq!(column.len(), 15);
            assert!(column.iter().all(|tile| tile.is_empty()));
        }
        assert_eq!(grid, Grid::default());
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(Grid::new(0), Err(InvalidGridSizeError { size: 0 }));
    }

    #[test]
    fn test_get_and_set_bounds_checked() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(3, 2, 'x').unwrap();
        assert_eq!(grid.get(3, 2).unwrap().contents(), Some('X'));
        assert_eq!(
            grid.get(4, 0),
            Err(OutOfBoundsError {
                x: 4,
                y: 0,
                size: 4
            })
        );
        assert_eq!(
            grid.set(0, 4, 'a'),
            Err(SetTileError::OutOfBounds(OutOfBoundsError {
                x: 0,
                y: 4,
                size: 4
            }))
        );
    }

    #[test]
    fn test_set_rejects_non_letters() {
        let mut grid = Grid::new(3).unwrap();
        assert_eq!(
            grid.set(0, 0, ' '),
            Err(SetTileError::InvalidLetter(InvalidLetterError { letter: ' ' }))
        );
        assert!(grid.set(1, 0, '7').unwrap_err().is_invalid_letter());
        assert!(grid.get(0, 0).unwrap().is_empty());
        assert!(grid.get(1, 0).unwrap().is_empty());
        assert_eq!(grid, Grid::new(3).unwrap());
    }

    #[test]
    fn test_write_word_is_all_or_nothing() {
        let mut grid = Grid::new(4).unwrap();
        let fits = Placement::new(
            Position::new(1, 0),
            Direction::South,
            Word::new("hat").unwrap(),
        );
        grid.write_word(&fits).unwrap();
        assert_eq!(grid.column_line(1).unwrap(), "HAT ");

        let overhang = Placement::new(
            Position::new(2, 0),
            Direction::East,
            Word::new("hat").unwrap(),
        );
        let before = grid.clone();
        assert_eq!(
            grid.write_word(&overhang),
            Err(OutOfBoundsError {
                x: 4,
                y: 0,
                size: 4
            })
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut live = Grid::new(5).unwrap();
        live.set(0, 0, 'a').unwrap();

        let mut scratch = live.clone();
        scratch.set(1, 1, 'b').unwrap();
        scratch.set(0, 0, 'c').unwrap();

        assert_eq!(live.get(0, 0).unwrap().contents(), Some('A'));
        assert!(live.get(1, 1).unwrap().is_empty());
        assert_eq!(scratch.get(0, 0).unwrap().contents(), Some('C'));
    }

    #[test]
    fn test_row_and_column_lines() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(0, 0, 'h').unwrap();
        grid.set(0, 1, 'i').unwrap();
        grid.set(2, 0, 'o').unwrap();

        assert_eq!(grid.row_line(0).unwrap(), "H O");
        assert_eq!(grid.row_line(1).unwrap(), "I  ");
        assert_eq!(grid.column_line(0).unwrap(), "HI ");
        assert_eq!(grid.column_line(2).unwrap(), "O  ");

        let lines = grid.lines().collect::<Vec<_>>();
        assert_eq!(lines, ["H O", "I  ", "   ", "HI ", "   ", "O  "]);
    }

    #[test]
    fn test_lines_out_of_range_are_errors() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(
            grid.row_line(3),
            Err(OutOfBoundsError {
                x: 0,
                y: 3,
                size: 3
            })
        );
        assert_eq!(
            grid.column_line(3),
            Err(OutOfBoundsError {
                x: 3,
                y: 0,
                size: 3
            })
        );
    }

    #[test]
    fn test_render_reads_across_columns() {
        let mut grid = Grid::new(2).unwrap();
        // cells[1][0] and cells[0][1]
        grid.set(1, 0, 'a').unwrap();
        grid.set(0, 1, 'b').unwrap();

        let lines = grid.render().collect::<Vec<_>>();
        assert_eq!(lines, [" A", "", "B ", ""]);
        // restartable
        assert_eq!(grid.render().collect::<Vec<_>>(), lines);
        assert_eq!(grid.to_string(), " A\n\nB \n\n");
    }

    #[test]
    fn test_serde_row_lines() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(0, 0, 'h').unwrap();
        grid.set(1, 0, 'i').unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"["HI ","   ","   "]"#);
        let restored: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, grid);
    }

    #[test]
    fn test_deserialize_rejects_malformed_rows() {
        assert!(serde_json::from_str::<Grid>("[]").is_err());
        assert!(serde_json::from_str::<Grid>(r#"["AB","A"]"#).is_err());
        assert!(serde_json::from_str::<Grid>(r#"["A1","  "]"#).is_err());
    }
}
