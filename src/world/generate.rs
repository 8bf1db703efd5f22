use std::fmt::{Display, Formatter};

use itertools::iproduct;
use rand::Rng;

use crate::basic::{board, GridPoint, Ticks};
use crate::cell::{Cell, Tree, TreeState};
use crate::world::World;

/// Obstacles are trees this often, rocks otherwise
const TREE_PROBABILITY: f64 = 0.6;
/// Generated trees start out dead this often, grown otherwise
const DEAD_TREE_PROBABILITY: f64 = 0.2;

#[derive(Debug, Error)]
#[must_use]
pub struct WorldGenerationError {
    pub requested: usize,
    pub placed: usize,
    pub spacing: usize,
}

impl Display for WorldGenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "world generation error: placed {} of {} objects, no valid tile left with spacing {}",
            self.placed, self.requested, self.spacing
        )
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Params {
    /// How many trees and rocks to place
    pub count: usize,
    /// Minimum Chebyshev distance between two obstacles is `spacing + 1`
    pub spacing: usize,
    /// Row kept free of obstacles, the snake spawns on it
    pub clear_row: isize,
    /// Random samples per object before falling back to a full scan
    pub attempts: usize,
}

fn is_valid(world: &World, pos: GridPoint, params: &Params) -> bool {
    if pos.y == params.clear_row || !world.block(pos).is_empty() {
        return false;
    }

    // the neighbourhood is clamped to the board, not wrapped
    let dim = world.dim();
    let d = params.spacing as isize;
    let xs = (pos.x - d).max(0)..=(pos.x + d).min(dim.x - 1);
    let ys = (pos.y - d).max(0)..=(pos.y + d).min(dim.y - 1);
    !iproduct!(ys, xs).any(|(y, x)| world.block(GridPoint { x, y }).kind().is_obstacle())
}

fn random_obstacle(now: Ticks, rng: &mut impl Rng) -> Cell {
    if rng.gen_bool(TREE_PROBABILITY) {
        let state = if rng.gen_bool(DEAD_TREE_PROBABILITY) {
            TreeState::Dead
        } else {
            TreeState::Grown
        };
        Cell::Tree(Tree::new(state, now, rng))
    } else {
        Cell::Rock
    }
}

/// Scatter `params.count` trees and rocks over empty tiles, keeping them
/// apart and off the clear row
pub fn generate(
    world: &mut World,
    params: &Params,
    now: Ticks,
    rng: &mut impl Rng,
) -> Result<(), WorldGenerationError> {
    let dim = world.dim();

    for placed in 0..params.count {
        let sampled = (0..params.attempts)
            .map(|_| GridPoint {
                x: rng.gen_range(0..dim.x),
                y: rng.gen_range(0..dim.y),
            })
            .find(|&pos| is_valid(world, pos, params));

        // unlucky or crowded, settle it with a full scan
        let pos = match sampled {
            Some(pos) => Some(pos),
            None => board::random_free_spot(dim, |pos| is_valid(world, pos, params), rng),
        };
        let Some(pos) = pos else {
            let error = WorldGenerationError {
                requested: params.count,
                placed,
                spacing: params.spacing,
            };
            log::warn!("{}", error);
            return Err(error);
        };

        let obstacle = random_obstacle(now, rng);
        log::debug!("placing {} at {:?}", obstacle.kind(), pos);
        world.set_block(pos, obstacle);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Kind;
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params(count: usize, spacing: usize) -> Params {
        Params { count, spacing, clear_row: 2, attempts: 10_000 }
    }

    fn obstacles(world: &World) -> Vec<GridPoint> {
        world
            .points()
            .filter(|&pos| world.block(pos).kind().is_obstacle())
            .collect()
    }

    #[test]
    fn test_nothing_requested() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut world = World::new(GridPoint::new(24, 13));
        generate(&mut world, &params(0, 3), 0, &mut rng).unwrap();
        assert!(world.block_cells().iter().all(Cell::is_empty));
    }

    #[test]
    fn test_spacing_and_clear_row() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut world = World::new(GridPoint::new(24, 13));
            generate(&mut world, &params(10, 3), 0, &mut rng).unwrap();

            let placed = obstacles(&world);
            assert_eq!(placed.len(), 10, "seed {}", seed);
            assert!(placed.iter().all(|pos| pos.y != 2));
            for (a, b) in placed.iter().tuple_combinations() {
                assert!(a.chebyshev_distance(*b) > 3, "{:?} and {:?} too close", a, b);
            }
        }
    }

    #[test]
    fn test_only_trees_and_rocks() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut world = World::new(GridPoint::new(40, 40));
        generate(&mut world, &params(30, 1), 0, &mut rng).unwrap();

        let trees = world.count(Kind::Tree);
        let rocks = world.count(Kind::Rock);
        assert_eq!(trees + rocks, 30);
        assert!(trees > 0 && rocks > 0);
        for pos in world.positions_of(Kind::Tree) {
            match world.block(pos) {
                Cell::Tree(tree) => assert_ne!(tree.state(), TreeState::Sapling),
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn test_skips_occupied_tiles() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut world = World::new(GridPoint::new(3, 3));
        // only (1, 0) is free outside the clear row
        for pos in world.points().collect_vec() {
            if pos != GridPoint::new(1, 0) {
                world.set_block(pos, Cell::Dirt);
            }
        }
        let params = Params { count: 1, spacing: 0, clear_row: 1, attempts: 3 };
        generate(&mut world, &params, 0, &mut rng).unwrap();
        assert!(world.block(GridPoint::new(1, 0)).kind().is_obstacle());
    }

    #[test]
    fn test_too_many_objects_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut world = World::new(GridPoint::new(24, 13));
        // with spacing 3 far fewer than 100 obstacles fit on the board
        let err = generate(&mut world, &params(100, 3), 0, &mut rng).unwrap_err();
        assert_eq!(err.requested, 100);
        assert!(err.placed > 0 && err.placed < 100);
        assert_eq!(obstacles(&world).len(), err.placed);
    }
}
