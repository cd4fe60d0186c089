//! Board and generation engine.
//!
//! A [`Grid`] owns every [`Cell`]. Each generation runs an evaluate pass over
//! the whole board followed by a commit pass, so no cell ever sees a
//! neighbor that was already updated in the same generation.

pub mod cell;
pub mod frame;
pub mod grid;
pub mod simulation;

pub use cell::Cell;
pub use frame::Frame;
pub use grid::{Cells, CellsMut, Grid};
pub use simulation::Simulation;
