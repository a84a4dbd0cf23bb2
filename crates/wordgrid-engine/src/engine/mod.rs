//! Placement rules and the board that enforces them.
//!
//! - [`PlacementValidator`] - runs the check pipeline against a scratch grid
//! - [`PlacementCheck`] - the named stages of that pipeline
//! - [`PlacementRejection`] - why a placement was refused
//! - [`BoardController`] - owns the live grid and commits accepted placements
//!
//! # Placement Flow
//!
//! 1. The caller submits an origin, a direction and a word
//! 2. The word is normalised to uppercase
//! 3. The live grid is cloned into a scratch grid
//! 4. Length, overlap and word checks run in order, stopping at the first failure
//! 5. On success every letter is written to the live grid; otherwise nothing changes

pub use self::{controller::*, validator::*};

mod controller;
mod validator;
