use std::cmp::Ordering;
use std::fmt::{Debug, Error, Formatter};

use num_integer::Integer;

use super::dir::Dir;

#[derive(Eq, PartialEq, Copy, Clone, Add, Sub, Hash)]
pub struct GridPoint {
    pub x: isize,
    pub y: isize,
}

/// Board dimensions, `x` is the width and `y` the height
pub type GridDim = GridPoint;

impl GridPoint {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn translate(self, dir: Dir, dist: usize) -> Self {
        let (dx, dy) = dir.delta();
        let dist = dist as isize;
        Self {
            x: self.x + dx * dist,
            y: self.y + dy * dist,
        }
    }

    // basically mod width, mod height
    #[must_use]
    pub fn wrap_around(self, board_dim: GridDim) -> Self {
        Self {
            x: self.x.mod_floor(&board_dim.x),
            y: self.y.mod_floor(&board_dim.y),
        }
    }

    // wraps around board edges
    #[must_use]
    pub fn wrapping_translate(self, dir: Dir, dist: usize, board_dim: GridDim) -> Self {
        self.translate(dir, dist).wrap_around(board_dim)
    }

    /// Direction from `self` towards `other` taking the shorter way around
    /// the board on each axis, ties between the axes go to the vertical one
    pub fn wrapping_dir_to(self, other: Self, board_dim: GridDim) -> Dir {
        let mut dx = other.x - self.x;
        let mut dy = other.y - self.y;

        // |d| > dim / 2 without rounding
        if 2 * dx.abs() > board_dim.x {
            dx -= dx.signum() * board_dim.x;
        }
        if 2 * dy.abs() > board_dim.y {
            dy -= dy.signum() * board_dim.y;
        }

        if dx.abs() > dy.abs() {
            if dx > 0 {
                Dir::Right
            } else {
                Dir::Left
            }
        } else if dy > 0 {
            Dir::Down
        } else {
            Dir::Top
        }
    }

    /// Chebyshev distance on the plane (no wrapping)
    pub fn chebyshev_distance(self, other: Self) -> usize {
        (self.x - other.x).abs().max((self.y - other.y).abs()) as usize
    }

    /// Manhattan distance taking the shorter way around the board on each axis
    pub fn wrapping_manhattan_distance(self, other: Self, board_dim: GridDim) -> usize {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        (dx.min(board_dim.x - dx) + dy.min(board_dim.y - dy)) as usize
    }

    pub fn contains(self, pos: Self) -> bool {
        (0..self.x).contains(&pos.x) && (0..self.y).contains(&pos.y)
    }

    /// Number of tiles on a board of these dimensions
    pub fn area(self) -> usize {
        (self.x * self.y) as usize
    }
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

// row-major
impl PartialOrd for GridPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.y.cmp(&other.y) {
            Ordering::Equal => self.x.cmp(&other.x),
            ord => ord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use Dir::*;

    const DIM: GridDim = GridPoint::new(24, 13);

    #[test]
    fn test_wrapping_translate_stays_in_bounds() {
        for (x, y, dir) in iproduct!(0..DIM.x, 0..DIM.y, Dir::iter()) {
            let moved = GridPoint::new(x, y).wrapping_translate(dir, 1, DIM);
            assert!(DIM.contains(moved), "{:?} + {:?} -> {:?}", (x, y), dir, moved);
        }
    }

    #[test]
    fn test_full_cycle_has_no_drift() {
        for (x, y) in iproduct!(0..DIM.x, 0..DIM.y) {
            let start = GridPoint::new(x, y);
            let end = Dir::iter().fold(start, |pos, dir| pos.wrapping_translate(dir, 1, DIM));
            assert_eq!(start, end);
        }
    }

    #[test]
    fn test_wrap_edges() {
        [
            ((23, 2), Right, (0, 2)),
            ((0, 2), Left, (23, 2)),
            ((5, 0), Top, (5, 12)),
            ((5, 12), Down, (5, 0)),
            ((5, 5), Right, (6, 5)),
        ]
        .iter()
        .for_each(|&((x, y), dir, (ex, ey))| {
            assert_eq!(
                GridPoint::new(x, y).wrapping_translate(dir, 1, DIM),
                GridPoint::new(ex, ey)
            );
        });
    }

    #[test]
    fn test_wrapping_dir_to() {
        [
            ((5, 2), (6, 2), Right),
            ((6, 2), (5, 2), Left),
            ((5, 2), (5, 3), Down),
            ((5, 3), (5, 2), Top),
            // across the seam
            ((23, 2), (0, 2), Right),
            ((0, 2), (23, 2), Left),
            ((5, 0), (5, 12), Top),
            ((5, 12), (5, 0), Down),
            // ties resolve vertically
            ((5, 5), (6, 6), Down),
            ((5, 5), (4, 4), Top),
            // exactly half the width is not reflected
            ((0, 0), (12, 0), Right),
        ]
        .iter()
        .for_each(|&((fx, fy), (tx, ty), expect)| {
            let from = GridPoint::new(fx, fy);
            let to = GridPoint::new(tx, ty);
            assert_eq!(from.wrapping_dir_to(to, DIM), expect, "{:?} -> {:?}", from, to);
        });
    }

    #[test]
    fn test_wrapping_dir_to_antisymmetric() {
        let origin = GridPoint::new(10, 6);
        // offsets small enough that no reflection happens
        for (dx, dy) in iproduct!(-5..=5, -5..=5) {
            if (dx, dy) == (0, 0) {
                continue;
            }
            let other = GridPoint::new(origin.x + dx, origin.y + dy);
            assert_eq!(
                origin.wrapping_dir_to(other, DIM),
                -other.wrapping_dir_to(origin, DIM),
                "offset {:?}",
                (dx, dy)
            );
        }
    }

    #[test]
    fn test_distances() {
        let a = GridPoint::new(1, 1);
        assert_eq!(a.chebyshev_distance(GridPoint::new(4, 2)), 3);
        assert_eq!(a.wrapping_manhattan_distance(GridPoint::new(23, 12), DIM), 4);
        assert_eq!(a.wrapping_manhattan_distance(a, DIM), 0);
    }
}
