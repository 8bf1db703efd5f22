pub use dir::{Axis, Dir};
pub use grid_point::{GridDim, GridPoint};
pub use tick::{TickClock, Ticks};

pub mod board;
mod dir;
mod grid_point;
mod tick;
