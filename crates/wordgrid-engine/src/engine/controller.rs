use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    InvalidGridSizeError,
    core::{
        grid::Grid,
        placement::{Direction, Placement, Position, Word},
    },
    dictionary::Dictionary,
};

use super::validator::{PlacementRejection, PlacementValidator};

/// Owner of the live board.
///
/// All writes to the live grid go through [`BoardController::place`], which
/// validates against a scratch copy first, so a placement either lands in full
/// or not at all.
#[derive(Debug, Clone)]
pub struct BoardController {
    grid: Grid,
    dictionary: Arc<Dictionary>,
}

impl BoardController {
    #[must_use]
    pub fn new(grid: Grid, dictionary: Arc<Dictionary>) -> Self {
        Self { grid, dictionary }
    }

    pub fn with_size(size: usize, dictionary: Arc<Dictionary>) -> Result<Self, InvalidGridSizeError> {
        Ok(Self::new(Grid::new(size)?, dictionary))
    }

    #[must_use]
    pub fn with_default_size(dictionary: Arc<Dictionary>) -> Self {
        Self::new(Grid::default(), dictionary)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn validator(&self) -> PlacementValidator<'_> {
        PlacementValidator::new(&self.dictionary)
    }

    /// Validates `placement` without committing it.
    pub fn check(&self, placement: &Placement) -> Result<(), PlacementRejection> {
        self.validator().validate(&self.grid, placement)
    }

    /// Parses `word` and places it. See [`BoardController::place`].
    pub fn place_word(
        &mut self,
        origin: Position,
        direction: Direction,
        word: &str,
    ) -> Result<(), PlacementRejection> {
        let word = Word::new(word).inspect_err(|err| debug!(%err, "malformed word"))?;
        self.place(&Placement::new(origin, direction, word))
    }

    /// Validates `placement` and, if every check passes, writes it to the live grid.
    pub fn place(&mut self, placement: &Placement) -> Result<(), PlacementRejection> {
        if let Err(rejection) = self.check(placement) {
            debug!(%placement, %rejection, "placement rejected");
            return Err(rejection);
        }
        self.grid.write_word(placement)?;
        info!(%placement, "placement committed");
        Ok(())
    }

    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        self.grid.render()
    }
}
