use crate::basic::Dir::{self, *};
use crate::cell::AtlasIndex;

#[derive(Clone, Debug)]
pub struct SnakeHead {
    dir: Dir,
    texture: AtlasIndex,
}

impl SnakeHead {
    pub fn new(dir: Dir) -> Self {
        Self {
            dir,
            texture: AtlasIndex::NONE,
        }
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn set_direction(&mut self, dir: Dir) {
        self.dir = dir;
    }

    /// The sprite follows the direction on update, not on `set_direction`
    pub fn update(&mut self) {
        self.texture = match self.dir {
            Left => AtlasIndex::new(1, 0),
            Top => AtlasIndex::new(2, 0),
            Right => AtlasIndex::new(3, 0),
            Down => AtlasIndex::new(4, 0),
        };
    }

    pub fn texture(&self) -> AtlasIndex {
        self.texture
    }
}

#[derive(Clone, Debug)]
pub struct SnakeBody {
    texture: AtlasIndex,
}

impl Default for SnakeBody {
    fn default() -> Self {
        Self {
            texture: SnakeBody::STRAIGHT_HORIZONTAL,
        }
    }
}

impl SnakeBody {
    const STRAIGHT_HORIZONTAL: AtlasIndex = AtlasIndex::new(1, 1);
    const STRAIGHT_VERTICAL: AtlasIndex = AtlasIndex::new(2, 1);
    const CORNER_LEFT_TOP: AtlasIndex = AtlasIndex::new(4, 1);
    const CORNER_LEFT_DOWN: AtlasIndex = AtlasIndex::new(3, 1);
    const CORNER_TOP_RIGHT: AtlasIndex = AtlasIndex::new(1, 2);
    const CORNER_RIGHT_DOWN: AtlasIndex = AtlasIndex::new(2, 2);

    /// `forward` points to the neighbour closer to the head, `backward` to
    /// the one closer to the tail
    pub fn set_direction(&mut self, forward: Dir, backward: Dir) {
        self.texture = match (forward, backward) {
            (Left, Top) | (Top, Left) => Self::CORNER_LEFT_TOP,
            (Left, Down) | (Down, Left) => Self::CORNER_LEFT_DOWN,
            (Top, Right) | (Right, Top) => Self::CORNER_TOP_RIGHT,
            (Right, Down) | (Down, Right) => Self::CORNER_RIGHT_DOWN,
            (Top, Down) | (Down, Top) => Self::STRAIGHT_VERTICAL,
            // both neighbours on the same side only happens on degenerate boards
            (Left, Right) | (Right, Left) | (Left, Left) | (Top, Top) | (Right, Right) | (Down, Down) => {
                Self::STRAIGHT_HORIZONTAL
            }
        };
    }

    pub fn texture(&self) -> AtlasIndex {
        self.texture
    }
}

#[derive(Clone, Debug)]
pub struct SnakeTail {
    texture: AtlasIndex,
}

impl Default for SnakeTail {
    fn default() -> Self {
        Self {
            texture: AtlasIndex::new(1, 1),
        }
    }
}

impl SnakeTail {
    /// `forward` points to the neighbour closer to the head
    pub fn set_direction(&mut self, forward: Dir) {
        self.texture = match forward {
            Left => AtlasIndex::new(3, 2),
            Top => AtlasIndex::new(4, 2),
            Right => AtlasIndex::new(5, 2),
            Down => AtlasIndex::new(6, 2),
        };
    }

    pub fn texture(&self) -> AtlasIndex {
        self.texture
    }
}
