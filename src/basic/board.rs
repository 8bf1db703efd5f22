use rand::seq::IteratorRandom;
use rand::Rng;

use crate::basic::{GridDim, GridPoint};

/// All points of the board in row-major order
pub fn points(board_dim: GridDim) -> impl Iterator<Item = GridPoint> {
    (0..board_dim.y).flat_map(move |y| (0..board_dim.x).map(move |x| GridPoint { x, y }))
}

/// Uniformly pick one of the points accepted by `is_free`,
/// `None` if there are no such points
pub fn random_free_spot(
    board_dim: GridDim,
    is_free: impl Fn(GridPoint) -> bool,
    rng: &mut impl Rng,
) -> Option<GridPoint> {
    points(board_dim).filter(|&point| is_free(point)).choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_points_row_major() {
        let dim = GridPoint::new(3, 2);
        let all: Vec<_> = points(dim).collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], GridPoint::new(0, 0));
        assert_eq!(all[1], GridPoint::new(1, 0));
        assert_eq!(all[3], GridPoint::new(0, 1));
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_random_free_spot() {
        let dim = GridPoint::new(5, 5);
        let mut rng = StdRng::seed_from_u64(7);

        let only = GridPoint::new(3, 4);
        for _ in 0..20 {
            assert_eq!(random_free_spot(dim, |p| p == only, &mut rng), Some(only));
        }

        assert_eq!(random_free_spot(dim, |_| false, &mut rng), None);
    }
}
