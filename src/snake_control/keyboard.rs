use crate::basic::Dir;
use crate::snake::Snake;
use crate::snake_control::Controller;
use crate::world::World;

/// Whatever knows which direction keys are held down
pub trait Input {
    fn is_pressed(&self, dir: Dir) -> bool;
}

impl<F: Fn(Dir) -> bool> Input for F {
    fn is_pressed(&self, dir: Dir) -> bool {
        self(dir)
    }
}

/// Maps held keys to a turn, only keys for the axis the snake isn't moving
/// along are looked at so pressing "backwards" does nothing
pub struct Keyboard<I> {
    input: I,
}

impl<I: Input> Keyboard<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I: Input> Controller for Keyboard<I> {
    fn next_dir(&mut self, snake: &Snake, _: &World) -> Option<Dir> {
        snake
            .dir()
            .turns()
            .into_iter()
            .find(|&dir| self.input.is_pressed(dir))
    }
}
