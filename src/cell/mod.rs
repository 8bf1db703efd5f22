pub use apple::Apple;
pub use snake_part::{SnakeBody, SnakeHead, SnakeTail};
pub use tree::{Tree, TreeState};

use crate::basic::{GridPoint, Ticks};
use crate::color::{self, Color};

mod apple;
mod snake_part;
mod tree;

/// Position of a sprite in the texture atlas (in sprites, not pixels)
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AtlasIndex {
    pub x: u8,
    pub y: u8,
}

impl AtlasIndex {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub const NONE: Self = Self::new(0, 0);
    pub const GRASS: Self = Self::new(1, 3);
    pub const DIRT: Self = Self::new(1, 3);
    pub const ROCK: Self = Self::new(6, 3);
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display)]
pub enum Kind {
    Empty,
    Grass,
    Dirt,
    Rock,
    Apple,
    Tree,
    SnakeHead,
    SnakeBody,
    SnakeTail,
}

impl Kind {
    pub fn is_snake(self) -> bool {
        matches!(self, Kind::SnakeHead | Kind::SnakeBody | Kind::SnakeTail)
    }

    /// Trees and rocks, what world generation keeps apart
    pub fn is_obstacle(self) -> bool {
        matches!(self, Kind::Tree | Kind::Rock)
    }
}

/// What a cell asks to be turned into
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Seed {
    Sapling,
}

/// Raised by a cell during its update, applied by the owner of the world
/// after the sweep since cells don't know about the grid they live in
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Replacement {
    pub pos: GridPoint,
    /// The kind of cell expected at `pos`, the request is stale otherwise
    pub expected: Kind,
    pub seed: Seed,
}

/// The content of a single tile of one of the world's layers, cells are
/// plain values, replacing a tile's content means overwriting it
#[derive(Clone, Debug)]
pub enum Cell {
    Empty,
    Grass,
    Dirt,
    Rock,
    Apple(Apple),
    Tree(Tree),
    SnakeHead(SnakeHead),
    SnakeBody(SnakeBody),
    SnakeTail(SnakeTail),
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    pub fn kind(&self) -> Kind {
        match self {
            Cell::Empty => Kind::Empty,
            Cell::Grass => Kind::Grass,
            Cell::Dirt => Kind::Dirt,
            Cell::Rock => Kind::Rock,
            Cell::Apple(_) => Kind::Apple,
            Cell::Tree(_) => Kind::Tree,
            Cell::SnakeHead(_) => Kind::SnakeHead,
            Cell::SnakeBody(_) => Kind::SnakeBody,
            Cell::SnakeTail(_) => Kind::SnakeTail,
        }
    }

    /// Ends the game when a snake's head moves onto it
    pub fn is_collidable(&self) -> bool {
        match self {
            Cell::Rock => true,
            Cell::Tree(tree) => tree.is_collidable(),
            Cell::SnakeHead(_) | Cell::SnakeBody(_) | Cell::SnakeTail(_) => true,
            Cell::Empty | Cell::Grass | Cell::Dirt | Cell::Apple(_) => false,
        }
    }

    /// Gets eaten when a snake's head moves onto it
    pub fn is_collectable(&self) -> bool {
        matches!(self, Cell::Apple(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Advance the cell by one tick
    pub fn update(&mut self, now: Ticks) -> Option<Replacement> {
        match self {
            Cell::Apple(apple) => apple.update(now),
            Cell::Tree(tree) => {
                tree.update(now);
                None
            }
            Cell::SnakeHead(head) => {
                head.update();
                None
            }
            Cell::Empty
            | Cell::Grass
            | Cell::Dirt
            | Cell::Rock
            | Cell::SnakeBody(_)
            | Cell::SnakeTail(_) => None,
        }
    }

    pub fn texture(&self) -> AtlasIndex {
        match self {
            Cell::Empty => AtlasIndex::NONE,
            Cell::Grass => AtlasIndex::GRASS,
            Cell::Dirt => AtlasIndex::DIRT,
            Cell::Rock => AtlasIndex::ROCK,
            Cell::Apple(_) => Apple::TEXTURE,
            Cell::Tree(tree) => tree.texture(),
            Cell::SnakeHead(head) => head.texture(),
            Cell::SnakeBody(body) => body.texture(),
            Cell::SnakeTail(tail) => tail.texture(),
        }
    }

    pub fn background(&self) -> Color {
        match self {
            Cell::Grass => *color::GRASS_COLOR,
            Cell::Dirt => *color::DIRT_COLOR,
            Cell::Apple(apple) => apple.background(),
            _ => Color::TRANSPARENT,
        }
    }

    pub fn debug_label(&self) -> Option<String> {
        match self {
            Cell::Apple(apple) => Some(format!("{}", apple.age())),
            Cell::Tree(tree) => Some(tree.state().to_string()),
            _ => None,
        }
    }
}
