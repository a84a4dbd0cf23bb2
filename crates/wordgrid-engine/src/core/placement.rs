use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::InvalidWordError;

/// Grid coordinate. `x` grows eastward, `y` grows southward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction a word is written in.
///
/// Parses case-insensitively from `"east"` / `"south"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[display("east")]
    East,
    #[display("south")]
    South,
}

impl Direction {
    /// The coordinate of `pos` along this direction's axis.
    #[must_use]
    pub fn axis_of(self, pos: Position) -> usize {
        match self {
            Direction::East => pos.x,
            Direction::South => pos.y,
        }
    }

    /// Moves `pos` by `steps` cells in this direction.
    ///
    /// Saturates instead of wrapping, so the result is always out of bounds
    /// when the true coordinate would not fit in `usize`.
    #[must_use]
    pub fn advance(self, pos: Position, steps: usize) -> Position {
        match self {
            Direction::East => Position::new(pos.x.saturating_add(steps), pos.y),
            Direction::South => Position::new(pos.x, pos.y.saturating_add(steps)),
        }
    }
}

/// A non-empty, uppercase, ASCII-letters-only word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    pub fn new(word: &str) -> Result<Self, InvalidWordError> {
        if word.is_empty() {
            return Err(InvalidWordError::Empty);
        }
        if let Some(ch) = word.chars().find(|ch| !ch.is_ascii_alphabetic()) {
            return Err(InvalidWordError::NonLetter {
                word: word.to_owned(),
                ch,
            });
        }
        Ok(Self(word.to_ascii_uppercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters. Always equal to the byte length since words are ASCII.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl FromStr for Word {
    type Err = InvalidWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Word {
    type Error = InvalidWordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Word> for String {
    fn from(value: Word) -> Self {
        value.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A request to write `word` starting at `origin` and running in `direction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub origin: Position,
    pub direction: Direction,
    pub word: Word,
}

impl Placement {
    #[must_use]
    pub fn new(origin: Position, direction: Direction, word: Word) -> Self {
        Self {
            origin,
            direction,
            word,
        }
    }

    /// Each letter of the word paired with the cell it lands on.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.word
            .letters()
            .enumerate()
            .map(move |(i, letter)| (self.direction.advance(self.origin, i), letter))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "origin: {}, direction: {}, word: {}",
            self.origin, self.direction, self.word
        )
    }
}
