use std::collections::VecDeque;

pub use builder::{Builder, BuilderError};

use crate::basic::{Dir, GridDim, GridPoint};
use crate::cell::{Cell, Kind, SnakeBody, SnakeHead, SnakeTail};
use crate::world::World;

pub mod builder;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    Living,
    Crashed,
}

/// What happened to the snake during a call to `advance`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Moved,
    Ate,
    Chopped,
    Crashed,
}

#[derive(Clone, Debug)]
pub enum Part {
    Head(SnakeHead),
    Body(SnakeBody),
    Tail(SnakeTail),
}

impl Part {
    pub fn kind(&self) -> Kind {
        match self {
            Part::Head(_) => Kind::SnakeHead,
            Part::Body(_) => Kind::SnakeBody,
            Part::Tail(_) => Kind::SnakeTail,
        }
    }

    fn to_cell(&self) -> Cell {
        match self {
            Part::Head(head) => Cell::SnakeHead(head.clone()),
            Part::Body(body) => Cell::SnakeBody(body.clone()),
            Part::Tail(tail) => Cell::SnakeTail(tail.clone()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Segment {
    pub pos: GridPoint,
    pub part: Part,
}

/// Head first, tail last, exactly one head and one tail
#[derive(Debug)]
pub struct Snake {
    segments: VecDeque<Segment>,
    /// Direction the snake is currently going
    dir: Dir,
    state: State,
}

impl Snake {
    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.segments.iter().map(|segment| segment.pos)
    }

    pub fn occupies(&self, pos: GridPoint) -> bool {
        self.segments.iter().any(|segment| segment.pos == pos)
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    /// Turn rules are the caller's business
    pub fn set_dir(&mut self, dir: Dir) {
        self.dir = dir;
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == State::Living
    }

    /// Move one tile in the current direction, resolving collisions, eating
    /// and chopping against the block layer, the world is left with the
    /// snake written back into it
    pub fn advance(&mut self, world: &mut World) -> Outcome {
        assert_eq!(self.state, State::Living, "called advance() on a crashed snake");

        self.remove_from(world);

        let board_dim = world.dim();
        let new_head_pos = self.head().pos.wrapping_translate(self.dir, 1, board_dim);
        let target = world.block(new_head_pos);

        // the tail hasn't moved yet, running into it counts
        let outcome = if target.is_collidable() || self.occupies(new_head_pos) {
            Outcome::Crashed
        } else if target.is_collectable() {
            Outcome::Ate
        } else if target.kind() == Kind::Tree {
            Outcome::Chopped
        } else {
            Outcome::Moved
        };

        match outcome {
            Outcome::Crashed => self.state = State::Crashed,
            _ => {
                // every segment takes its predecessor's place
                let mut previous = new_head_pos;
                for segment in self.segments.iter_mut() {
                    previous = std::mem::replace(&mut segment.pos, previous);
                }

                if outcome == Outcome::Ate {
                    // new body just before the tail, on the tile the tail left
                    let tail_idx = self.segments.len() - 1;
                    self.segments.insert(
                        tail_idx,
                        Segment {
                            pos: previous,
                            part: Part::Body(SnakeBody::default()),
                        },
                    );
                }
            }
        }

        self.apply_directions(board_dim);
        self.write_to(world);
        outcome
    }

    /// Point every segment's sprite at its neighbours
    pub fn apply_directions(&mut self, board_dim: GridDim) {
        let dir = self.dir;
        let positions: Vec<_> = self.positions().collect();
        for (i, segment) in self.segments.iter_mut().enumerate() {
            let pos = positions[i];
            match &mut segment.part {
                Part::Head(head) => head.set_direction(dir),
                Part::Body(body) => body.set_direction(
                    pos.wrapping_dir_to(positions[i - 1], board_dim),
                    pos.wrapping_dir_to(positions[i + 1], board_dim),
                ),
                Part::Tail(tail) => tail.set_direction(pos.wrapping_dir_to(positions[i - 1], board_dim)),
            }
        }
    }

    pub fn write_to(&self, world: &mut World) {
        for segment in &self.segments {
            world.occupy(segment.pos, segment.part.to_cell());
        }
    }

    pub fn remove_from(&self, world: &mut World) {
        for segment in &self.segments {
            world.vacate(segment.pos);
        }
    }
}
