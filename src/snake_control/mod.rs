pub use autopilot::Autopilot;
pub use keyboard::{Input, Keyboard};

use crate::basic::Dir;
use crate::snake::Snake;
use crate::world::World;

mod autopilot;
mod keyboard;

pub trait Controller {
    /// Direction the snake should take on the next step, `None` to keep going.
    /// Reversals are filtered out by the game, controllers don't have to.
    fn next_dir(&mut self, snake: &Snake, world: &World) -> Option<Dir>;
}
