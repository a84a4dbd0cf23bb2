//! Placement validation for a Scrabble-like word grid.
//!
//! The crate is split the same way a game engine usually is:
//!
//! - [`core`] holds the passive data: [`TileSpace`], [`Grid`] and the
//!   [`Placement`] request types.
//! - [`Dictionary`] is the read-only word set every placement is checked against.
//! - [`engine`] holds the rules: [`PlacementValidator`] runs the check pipeline
//!   against a scratch copy of the board and [`BoardController`] commits
//!   accepted placements to the live board.
//!
//! # Example
//!
//! ```
//! use wordgrid_engine::{BoardController, Dictionary, Direction, Position};
//!
//! let dictionary = Dictionary::from_words(["hello", "hi"]);
//! let mut board = BoardController::with_default_size(dictionary.into());
//!
//! board.place_word(Position::new(0, 0), Direction::South, "hello").unwrap();
//! assert!(board.place_word(Position::new(0, 0), Direction::East, "hi").is_ok());
//! assert!(board.place_word(Position::new(5, 5), Direction::East, "xyz").is_err());
//! ```

use std::{io, path::PathBuf};

pub use self::{core::*, dictionary::*, engine::*};

pub mod core;
mod dictionary;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("grid size must be positive, got {size}")]
pub struct InvalidGridSizeError {
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("position ({x}, {y}) is outside the {size}x{size} grid")]
pub struct OutOfBoundsError {
    pub x: usize,
    pub y: usize,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{letter:?} is not an ASCII letter")]
pub struct InvalidLetterError {
    pub letter: char,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum SetTileError {
    #[display("{_0}")]
    OutOfBounds(#[error(not(source))] OutOfBoundsError),
    #[display("{_0}")]
    InvalidLetter(#[error(not(source))] InvalidLetterError),
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("failed to read dictionary {}", path.display())]
pub struct DictionaryLoadError {
    pub path: PathBuf,
    pub source: io::Error,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidWordError {
    #[display("word is empty")]
    Empty,
    #[display("word {word:?} contains non-letter character {ch:?}")]
    NonLetter {
        word: String,
        ch: char,
    },
}
