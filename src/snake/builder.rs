use std::fmt::{Display, Formatter};

use super::*;

#[derive(Debug, Error)]
#[must_use]
pub struct BuilderError(pub Box<Builder>, pub &'static str);

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "snake builder error: {}", self.1)?;
        writeln!(f, "builder: {:?}", self.0)
    }
}

#[derive(Default, Clone, Debug)]
pub struct Builder {
    pub pos: Option<GridPoint>,
    pub dir: Option<Dir>,
    pub len: Option<usize>,
}

impl Builder {
    pub const MIN_LEN: usize = 3;

    #[inline(always)]
    #[must_use]
    pub fn pos(mut self, value: GridPoint) -> Self {
        self.pos = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn dir(mut self, value: Dir) -> Self {
        self.dir = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn len(mut self, value: usize) -> Self {
        self.len = Some(value);
        self
    }

    /// Lay the snake out in a straight line behind its head
    pub fn build(&self, board_dim: GridDim) -> Result<Snake, BuilderError> {
        let pos = self
            .pos
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `pos`"))?;
        let dir = self
            .dir
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `dir`"))?;
        let len = self
            .len
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `len`"))?;

        if !board_dim.contains(pos) {
            return Err(BuilderError(Box::new(self.clone()), "`pos` is outside of the board"));
        }
        if len < Self::MIN_LEN {
            return Err(BuilderError(
                Box::new(self.clone()),
                "a snake needs a head, a tail and at least one body segment",
            ));
        }
        let room = match dir.axis() {
            crate::basic::Axis::Horizontal => board_dim.x,
            crate::basic::Axis::Vertical => board_dim.y,
        };
        if len > room as usize {
            return Err(BuilderError(
                Box::new(self.clone()),
                "snake is longer than the board, it would overlap itself",
            ));
        }

        log::debug!("spawn snake at {:?} going {:?} with length {}", pos, dir, len);

        let segments = (0..len)
            .map(|i| Segment {
                pos: pos.wrapping_translate(-dir, i, board_dim),
                part: match i {
                    0 => Part::Head(SnakeHead::new(dir)),
                    i if i == len - 1 => Part::Tail(SnakeTail::default()),
                    _ => Part::Body(SnakeBody::default()),
                },
            })
            .collect();

        let mut snake = Snake {
            segments,
            dir,
            state: State::Living,
        };
        snake.apply_directions(board_dim);
        Ok(snake)
    }
}
