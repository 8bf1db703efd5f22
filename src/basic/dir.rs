use std::ops::{Add, Neg};

use Dir::*;

// defined in clockwise order starting at Top
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Display)]
pub enum Dir {
    Top = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => Top,
            1 => Right,
            2 => Down,
            _ => Left,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self + 2
    }
}

/// Rotate clockwise by `rhs` quarter turns
impl Add<u8> for Dir {
    type Output = Self;

    fn add(self, rhs: u8) -> Self::Output {
        Self::from(self as u8 + rhs % 4)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Axis {
    Horizontal, // -
    Vertical,   // |
}

impl Dir {
    // clockwise order starting from Top
    pub fn iter() -> impl Iterator<Item = Self> + Clone {
        [Top, Right, Down, Left].iter().copied()
    }

    pub fn axis(self) -> Axis {
        match self {
            Left | Right => Axis::Horizontal,
            Top | Down => Axis::Vertical,
        }
    }

    /// Unit offset `(dx, dy)`, y grows downwards
    pub fn delta(self) -> (isize, isize) {
        match self {
            Top => (0, -1),
            Right => (1, 0),
            Down => (0, 1),
            Left => (-1, 0),
        }
    }

    /// A snake can only turn onto the other axis, reversing and
    /// "turning" into the current direction are both rejected
    pub fn can_turn_to(self, other: Self) -> bool {
        self.axis() != other.axis()
    }

    /// The two directions a snake going in `self` may turn to, in the
    /// order pressed keys are checked
    pub fn turns(self) -> [Self; 2] {
        match self.axis() {
            Axis::Horizontal => [Top, Down],
            Axis::Vertical => [Left, Right],
        }
    }
}

#[test]
fn test_dir_math() {
    let test_plus = [(Top, 1, Right), (Top, 3, Left), (Left, 1, Top), (Down, 4, Down)];

    for &(start, add, expect) in &test_plus {
        assert_eq!(start + add, expect);
    }

    for dir in Dir::iter() {
        assert_eq!(-(-dir), dir);
        assert_ne!(-dir, dir);
        assert_eq!((-dir).axis(), dir.axis());
    }
}

#[test]
fn test_turns() {
    for dir in Dir::iter() {
        assert!(!dir.can_turn_to(dir));
        assert!(!dir.can_turn_to(-dir));
        for turn in dir.turns() {
            assert!(dir.can_turn_to(turn), "{:?} -> {:?}", dir, turn);
        }
    }
    assert_eq!(Right.turns(), [Top, Down]);
    assert_eq!(Left.turns(), [Top, Down]);
    assert_eq!(Top.turns(), [Left, Right]);
    assert_eq!(Down.turns(), [Left, Right]);
}
