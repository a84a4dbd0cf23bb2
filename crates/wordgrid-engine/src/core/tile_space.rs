use std::fmt;

use crate::InvalidLetterError;

/// Character used for empty cells in rendered and scanned lines.
pub const EMPTY_MARKER: char = ' ';

/// A single cell on the grid.
///
/// Holds either nothing or exactly one uppercase ASCII letter. Cells only ever
/// go from empty to occupied; there is no way to clear a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileSpace {
    contents: Option<char>,
}

impl TileSpace {
    pub const EMPTY: Self = Self { contents: None };

    #[must_use]
    pub fn contents(self) -> Option<char> {
        self.contents
    }

    /// Stores `letter`, uppercased. Anything but an ASCII letter is refused.
    pub fn set_contents(&mut self, letter: char) -> Result<(), InvalidLetterError> {
        if !letter.is_ascii_alphabetic() {
            return Err(InvalidLetterError { letter });
        }
        self.set_contents_unchecked(letter);
        Ok(())
    }

    pub(crate) fn set_contents_unchecked(&mut self, letter: char) {
        debug_assert!(letter.is_ascii_alphabetic());
        self.contents = Some(letter.to_ascii_uppercase());
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.contents.is_none()
    }

    /// The single character this cell renders as.
    #[must_use]
    pub fn as_char(self) -> char {
        self.contents.unwrap_or(EMPTY_MARKER)
    }
}

impl fmt::Display for TileSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
