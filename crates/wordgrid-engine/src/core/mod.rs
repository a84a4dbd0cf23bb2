pub use self::{grid::*, placement::*, tile_space::*};

pub(crate) mod grid;
pub(crate) mod placement;
pub(crate) mod tile_space;
