use tracing::debug;

use crate::{
    InvalidWordError, OutOfBoundsError, Position,
    core::{
        grid::Grid,
        placement::{Direction, Placement},
        tile_space::EMPTY_MARKER,
    },
    dictionary::Dictionary,
};

/// Shortest run of letters that counts as a word.
pub const MIN_WORD_LEN: usize = 2;

/// One stage of the placement pipeline.
///
/// Stages run in [`PlacementCheck::ALL`] order and the first failure stops the
/// pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PlacementCheck {
    /// Word is long enough and fits along its direction.
    #[display("length")]
    Length,
    /// Every target cell exists and is empty or already holds the same letter.
    #[display("overlap")]
    Overlap,
    /// Every run of letters on the resulting board is a dictionary word.
    #[display("words")]
    Words,
}

impl PlacementCheck {
    pub const ALL: [Self; 3] = [Self::Length, Self::Overlap, Self::Words];
}

/// Why a placement was refused.
///
/// This is an expected outcome rather than a fault; the live board is left
/// untouched whenever one is returned.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum PlacementRejection {
    #[display("word {word} is shorter than {} letters", MIN_WORD_LEN)]
    TooShort {
        word: String,
    },
    #[display("word {word} running {direction} from {origin} does not fit the {size}x{size} grid")]
    ExceedsBounds {
        word: String,
        origin: Position,
        direction: Direction,
        size: usize,
    },
    #[display("{_0}")]
    OutOfBounds(#[error(not(source))] OutOfBoundsError),
    #[display("letter {letter} at {position} conflicts with existing tile {existing}")]
    Conflict {
        position: Position,
        existing: char,
        letter: char,
    },
    #[display("not in dictionary: {}", words.join(", "))]
    InvalidWords {
        words: Vec<String>,
    },
    #[display("{_0}")]
    Malformed(#[error(not(source))] InvalidWordError),
}

impl PlacementRejection {
    /// The pipeline stage this rejection belongs to.
    ///
    /// `None` for malformed words, which are refused before the pipeline runs.
    #[must_use]
    pub fn check(&self) -> Option<PlacementCheck> {
        match self {
            Self::TooShort { .. } | Self::ExceedsBounds { .. } => Some(PlacementCheck::Length),
            Self::OutOfBounds(_) | Self::Conflict { .. } => Some(PlacementCheck::Overlap),
            Self::InvalidWords { .. } => Some(PlacementCheck::Words),
            Self::Malformed(_) => None,
        }
    }
}

impl From<OutOfBoundsError> for PlacementRejection {
    fn from(err: OutOfBoundsError) -> Self {
        Self::OutOfBounds(err)
    }
}

impl From<InvalidWordError> for PlacementRejection {
    fn from(err: InvalidWordError) -> Self {
        Self::Malformed(err)
    }
}

/// Runs the placement pipeline against a scratch copy of a board.
#[derive(Debug, Clone, Copy)]
pub struct PlacementValidator<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> PlacementValidator<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Checks `placement` against `live` without modifying it.
    pub fn validate(&self, live: &Grid, placement: &Placement) -> Result<(), PlacementRejection> {
        let mut scratch = live.clone();
        for check in PlacementCheck::ALL {
            let result = self.run_check(check, &mut scratch, placement);
            debug!(%check, word = %placement.word, passed = result.is_ok(), "placement check");
            result?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_valid(&self, live: &Grid, placement: &Placement) -> bool {
        self.validate(live, placement).is_ok()
    }

    fn run_check(
        &self,
        check: PlacementCheck,
        scratch: &mut Grid,
        placement: &Placement,
    ) -> Result<(), PlacementRejection> {
        match check {
            PlacementCheck::Length => check_length(scratch, placement),
            PlacementCheck::Overlap => check_overlap(scratch, placement),
            PlacementCheck::Words => self.check_words(scratch, placement),
        }
    }

    /// Writes the word into `scratch` and looks up every resulting run.
    fn check_words(
        &self,
        scratch: &mut Grid,
        placement: &Placement,
    ) -> Result<(), PlacementRejection> {
        scratch.write_word(placement)?;

        let mut invalid = Vec::new();
        for line in scratch.lines() {
            for run in line.split(EMPTY_MARKER) {
                if run.len() >= MIN_WORD_LEN && !self.dictionary.contains(run) {
                    invalid.push(run.to_owned());
                }
            }
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(PlacementRejection::InvalidWords { words: invalid })
        }
    }
}

fn check_length(grid: &Grid, placement: &Placement) -> Result<(), PlacementRejection> {
    let Placement {
        origin,
        direction,
        word,
    } = placement;

    if word.len() < MIN_WORD_LEN {
        return Err(PlacementRejection::TooShort {
            word: word.to_string(),
        });
    }
    if direction.axis_of(*origin).saturating_add(word.len()) > grid.size() {
        return Err(PlacementRejection::ExceedsBounds {
            word: word.to_string(),
            origin: *origin,
            direction: *direction,
            size: grid.size(),
        });
    }
    Ok(())
}

fn check_overlap(grid: &Grid, placement: &Placement) -> Result<(), PlacementRejection> {
    for (pos, letter) in placement.tiles() {
        match grid.get(pos.x, pos.y)?.contents() {
            Some(existing) if existing != letter => {
                return Err(PlacementRejection::Conflict {
                    position: pos,
                    existing,
                    letter,
                });
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::placement::Word;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["hello", "hat", "hi", "ho", "what", "ha", "oh"])
    }

    fn placement(x: usize, y: usize, direction: Direction, word: &str) -> Placement {
        Placement::new(Position::new(x, y), direction, Word::new(word).unwrap())
    }

    #[test]
    fn test_too_short_word_rejected() {
        let dictionary = Dictionary::from_words(["a"]);
        let validator = PlacementValidator::new(&dictionary);
        let grid = Grid::default();

        let result = validator.validate(&grid, &placement(0, 0, Direction::East, "a"));
        assert!(result.unwrap_err().is_too_short());
    }

    #[test]
    fn test_exceeds_bounds_rejected() {
        let dictionary = dictionary();
        let validator = PlacementValidator::new(&dictionary);
        let grid = Grid::default();

        let east = validator.validate(&grid, &placement(14, 14, Direction::East, "hat"));
        assert!(east.unwrap_err().is_exceeds_bounds());
        let south = validator.validate(&grid, &placement(0, 13, Direction::South, "hat"));
        assert!(south.unwrap_err().is_exceeds_bounds());
        let edge = validator.validate(&grid, &placement(12, 0, Direction::East, "hat"));
        assert_eq!(edge, Ok(()));
    }

    #[test]
    fn test_off_axis_origin_rejected_by_overlap_check() {
        let dictionary = dictionary();
        let validator = PlacementValidator::new(&dictionary);
        let grid = Grid::default();

        let err = validator
            .validate(&grid, &placement(0, 15, Direction::East, "hat"))
            .unwrap_err();
        assert_eq!(
            err,
            PlacementRejection::OutOfBounds(OutOfBoundsError {
                x: 0,
                y: 15,
                size: 15
            })
        );
        assert_eq!(err.check(), Some(PlacementCheck::Overlap));
    }

    #[test]
    fn test_empty_cells_always_pass_overlap() {
        let grid = Grid::default();
        for y in 0..grid.size() {
            for x in 0..grid.size() - 3 {
                let p = placement(x, y, Direction::East, "zzz");
                assert_eq!(check_overlap(&grid, &p), Ok(()));
            }
        }
    }

    #[test]
    fn test_conflicting_letter_rejected() {
        let dictionary = dictionary();
        let validator = PlacementValidator::new(&dictionary);
        let mut grid = Grid::default();
        grid.set(0, 0, 'h').unwrap();
        grid.set(0, 1, 'i').unwrap();

        let err = validator
            .validate(&grid, &placement(0, 1, Direction::East, "ho"))
            .unwrap_err();
        assert_eq!(
            err,
            PlacementRejection::Conflict {
                position: Position::new(0, 1),
                existing: 'I',
                letter: 'H',
            }
        );
        assert_eq!(err.check(), Some(PlacementCheck::Overlap));
    }

    #[test]
    fn test_unknown_word_rejected() {
        let dictionary = dictionary();
        let validator = PlacementValidator::new(&dictionary);
        let grid = Grid::default();

        let err = validator
            .validate(&grid, &placement(3, 3, Direction::East, "fgoa"))
            .unwrap_err();
        assert_eq!(
            err,
            PlacementRejection::InvalidWords {
                words: vec!["FGOA".to_owned()]
            }
        );
        assert_eq!(err.check(), Some(PlacementCheck::Words));
    }

    #[test]
    fn test_accidental_cross_word_rejected() {
        let dictionary = dictionary();
        let validator = PlacementValidator::new(&dictionary);
        let mut grid = Grid::default();
        for (i, letter) in "HAT".chars().enumerate() {
            grid.set(i, 0, letter).unwrap();
        }

        // "I" under "H" only extends column 0.
        assert!(validator.is_valid(&grid, &placement(0, 0, Direction::South, "hi")));

        // "OH" directly under "HAT" creates the columns "HO" and "AH".
        let err = validator
            .validate(&grid, &placement(0, 1, Direction::East, "oh"))
            .unwrap_err();
        assert_eq!(
            err,
            PlacementRejection::InvalidWords {
                words: vec!["AH".to_owned()]
            }
        );
    }

    #[test]
    fn test_validation_leaves_live_grid_untouched() {
        let dictionary = dictionary();
        let validator = PlacementValidator::new(&dictionary);
        let grid = Grid::default();
        let before = grid.clone();

        let p = placement(0, 0, Direction::South, "hello");
        assert_eq!(validator.validate(&grid, &p), Ok(()));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let dictionary = dictionary();
        let validator = PlacementValidator::new(&dictionary);
        let mut grid = Grid::default();
        grid.set(0, 0, 'h').unwrap();

        for p in [
            placement(0, 0, Direction::East, "hat"),
            placement(0, 0, Direction::East, "ohm"),
            placement(1, 1, Direction::South, "x"),
            placement(3, 3, Direction::East, "fgoa"),
        ] {
            let first = validator.validate(&grid, &p);
            let second = validator.validate(&grid, &p);
            assert_eq!(first, second, "{p}");
        }
    }

    #[test]
    fn test_malformed_word_has_no_check() {
        let err = PlacementRejection::from(Word::new("he11o").unwrap_err());
        assert!(err.is_malformed());
        assert_eq!(err.check(), None);

        let err = PlacementRejection::TooShort {
            word: "A".to_owned(),
        };
        assert_eq!(err.check(), Some(PlacementCheck::Length));
    }

    #[test]
    fn test_refused_cell_write_does_not_block_placement() {
        let dictionary = dictionary();
        let validator = PlacementValidator::new(&dictionary);
        let mut grid = Grid::default();
        assert!(grid.set(0, 0, ' ').is_err());

        assert_eq!(
            validator.validate(&grid, &placement(0, 0, Direction::East, "hat")),
            Ok(())
        );
    }

    #[test]
    fn test_rejection_messages() {
        let err = PlacementRejection::InvalidWords {
            words: vec!["FGOA".to_owned(), "XQ".to_owned()],
        };
        assert_eq!(err.to_string(), "not in dictionary: FGOA, XQ");

        let err = PlacementRejection::TooShort {
            word: "A".to_owned(),
        };
        assert_eq!(err.to_string(), "word A is shorter than 2 letters");
    }
}
