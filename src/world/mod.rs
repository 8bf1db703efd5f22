use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use rand::Rng;

pub use generate::{generate, WorldGenerationError};

use crate::basic::{board, GridDim, GridPoint, Ticks};
use crate::cell::{Cell, Kind, Replacement, Seed, Tree, TreeState};

pub mod generate;

#[derive(Debug, Error)]
#[must_use]
pub struct OutOfBoundsError {
    pub pos: GridPoint,
    pub board_dim: GridDim,
}

impl Display for OutOfBoundsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} is outside of a {}x{} board", self.pos, self.board_dim.x, self.board_dim.y)
    }
}

#[derive(Debug, Error)]
#[must_use]
pub struct BoardDimError {
    pub board_dim: GridDim,
}

impl Display for BoardDimError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "a board can't be {}x{}", self.board_dim.x, self.board_dim.y)
    }
}

/// Two same-shaped layers addressed by linear index, the terrain layer holds
/// background cover and the block layer everything the snake interacts with
pub struct World {
    dim: GridDim,
    terrain: Vec<Cell>,
    block: Vec<Cell>,
    /// Trees covered by a snake segment, put back once the segment moves on
    beneath: HashMap<usize, Cell>,
}

impl World {
    /// Panics on an empty board, see `try_new`
    pub fn new(dim: GridDim) -> Self {
        match Self::try_new(dim) {
            Ok(world) => world,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_new(dim: GridDim) -> Result<Self, BoardDimError> {
        if dim.x <= 0 || dim.y <= 0 {
            return Err(BoardDimError { board_dim: dim });
        }
        let area = dim.area();
        Ok(Self {
            dim,
            terrain: vec![Cell::Grass; area],
            block: vec![Cell::Empty; area],
            beneath: HashMap::new(),
        })
    }

    pub fn dim(&self) -> GridDim {
        self.dim
    }

    /// Linear index of an in-bounds point, panics otherwise
    pub fn index(&self, pos: GridPoint) -> usize {
        assert!(
            self.dim.contains(pos),
            "{:?} is outside of a {}x{} board",
            pos,
            self.dim.x,
            self.dim.y
        );
        (pos.y * self.dim.x + pos.x) as usize
    }

    pub fn checked_index(&self, pos: GridPoint) -> Result<usize, OutOfBoundsError> {
        if self.dim.contains(pos) {
            Ok(self.index(pos))
        } else {
            Err(OutOfBoundsError { pos, board_dim: self.dim })
        }
    }

    pub fn point(&self, index: usize) -> GridPoint {
        assert!(index < self.block.len(), "index {} out of bounds", index);
        let index = index as isize;
        GridPoint {
            x: index % self.dim.x,
            y: index / self.dim.x,
        }
    }

    /// Row-major
    pub fn points(&self) -> impl Iterator<Item = GridPoint> {
        board::points(self.dim)
    }

    pub fn block(&self, pos: GridPoint) -> &Cell {
        &self.block[self.index(pos)]
    }

    pub fn try_block(&self, pos: GridPoint) -> Result<&Cell, OutOfBoundsError> {
        Ok(&self.block[self.checked_index(pos)?])
    }

    pub fn terrain(&self, pos: GridPoint) -> &Cell {
        &self.terrain[self.index(pos)]
    }

    pub fn block_cells(&self) -> &[Cell] {
        &self.block
    }

    pub fn terrain_cells(&self) -> &[Cell] {
        &self.terrain
    }

    /// The tree kept under a snake segment at `pos`, if any
    pub fn beneath(&self, pos: GridPoint) -> Option<&Cell> {
        self.beneath.get(&self.index(pos))
    }

    /// Overwrite the block cell at `pos`, returns what was there
    pub fn set_block(&mut self, pos: GridPoint, cell: Cell) -> Cell {
        let idx = self.index(pos);
        std::mem::replace(&mut self.block[idx], cell)
    }

    pub fn set_terrain(&mut self, pos: GridPoint, cell: Cell) -> Cell {
        let idx = self.index(pos);
        std::mem::replace(&mut self.terrain[idx], cell)
    }

    /// Put a snake segment on `pos`, a tree standing there is kept
    /// underneath, anything else is overwritten
    pub fn occupy(&mut self, pos: GridPoint, cell: Cell) {
        let idx = self.index(pos);
        let previous = std::mem::replace(&mut self.block[idx], cell);
        if previous.kind() == Kind::Tree {
            self.beneath.insert(idx, previous);
        }
    }

    /// Remove whatever occupies `pos`, restoring a covered tree if there is one
    pub fn vacate(&mut self, pos: GridPoint) {
        let idx = self.index(pos);
        self.block[idx] = self.beneath.remove(&idx).unwrap_or(Cell::Empty);
    }

    pub fn positions_of(&self, kind: Kind) -> impl Iterator<Item = GridPoint> + '_ {
        self.block
            .iter()
            .enumerate()
            .filter(move |(_, cell)| cell.kind() == kind)
            .map(move |(idx, _)| self.point(idx))
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.block.iter().filter(|cell| cell.kind() == kind).count()
    }

    /// Update every tile in row-major order, terrain before block (and before
    /// anything kept under the block), returns the replacements requested
    pub fn update(&mut self, now: Ticks) -> Vec<Replacement> {
        let mut replacements = vec![];
        for idx in 0..self.block.len() {
            replacements.extend(self.terrain[idx].update(now));
            replacements.extend(self.block[idx].update(now));
            if let Some(cell) = self.beneath.get_mut(&idx) {
                replacements.extend(cell.update(now));
            }
        }
        replacements
    }

    /// Apply a replacement unless it's stale (the cell that requested it is
    /// no longer there), returns whether anything was replaced
    pub fn apply(&mut self, replacement: Replacement, now: Ticks, rng: &mut impl Rng) -> bool {
        let idx = self.index(replacement.pos);
        if self.block[idx].kind() != replacement.expected {
            return false;
        }
        self.block[idx] = match replacement.seed {
            Seed::Sapling => Cell::Tree(Tree::new(TreeState::Sapling, now, rng)),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Dir;
    use crate::cell::{Apple, SnakeHead};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dim() -> GridDim {
        GridPoint::new(24, 13)
    }

    #[test]
    fn test_new_world_layers() {
        let world = World::new(dim());
        assert_eq!(world.terrain_cells().len(), 24 * 13);
        assert_eq!(world.block_cells().len(), 24 * 13);
        assert!(world.terrain_cells().iter().all(|c| c.kind() == Kind::Grass));
        assert!(world.block_cells().iter().all(Cell::is_empty));
    }

    #[test]
    fn test_empty_board_rejected() {
        for board_dim in [GridPoint::new(0, 13), GridPoint::new(24, 0), GridPoint::new(-3, 5)] {
            let err = World::try_new(board_dim).err().unwrap();
            assert_eq!(err.board_dim, board_dim);
        }
        assert!(World::try_new(GridPoint::new(1, 1)).is_ok());
    }

    #[test]
    fn test_index_round_trip() {
        let world = World::new(dim());
        for (i, pos) in world.points().enumerate() {
            assert_eq!(world.index(pos), i);
            assert_eq!(world.point(i), pos);
        }
    }

    #[test]
    fn test_checked_index() {
        let world = World::new(dim());
        assert!(world.checked_index(GridPoint::new(23, 12)).is_ok());
        for pos in [GridPoint::new(24, 0), GridPoint::new(0, 13), GridPoint::new(-1, 0)] {
            let err = world.checked_index(pos).unwrap_err();
            assert_eq!(err.pos, pos);
            assert!(world.try_block(pos).is_err());
        }
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_panics() {
        let world = World::new(dim());
        world.block(GridPoint::new(24, 2));
    }

    #[test]
    fn test_occupy_keeps_trees() {
        let mut world = World::new(dim());
        let pos = GridPoint::new(3, 3);
        world.set_block(pos, Cell::Tree(Tree::with_lifetime(TreeState::Sapling, 0, 400)));

        world.occupy(pos, Cell::SnakeHead(SnakeHead::new(Dir::Right)));
        assert_eq!(world.block(pos).kind(), Kind::SnakeHead);
        assert_eq!(world.beneath(pos).map(Cell::kind), Some(Kind::Tree));

        world.vacate(pos);
        assert_eq!(world.block(pos).kind(), Kind::Tree);
        assert!(world.beneath(pos).is_none());

        // apples are consumed, not kept
        world.set_block(pos, Cell::Apple(Apple::new(pos, 0)));
        world.occupy(pos, Cell::SnakeHead(SnakeHead::new(Dir::Right)));
        world.vacate(pos);
        assert!(world.block(pos).is_empty());
    }

    #[test]
    fn test_covered_trees_keep_growing() {
        let mut world = World::new(dim());
        let pos = GridPoint::new(3, 3);
        world.set_block(pos, Cell::Tree(Tree::with_lifetime(TreeState::Sapling, 0, 400)));
        world.occupy(pos, Cell::SnakeHead(SnakeHead::new(Dir::Right)));

        for now in 0..=Tree::SAPLING_DURATION {
            world.update(now);
        }
        world.vacate(pos);
        match world.block(pos) {
            Cell::Tree(tree) => assert_eq!(tree.state(), TreeState::Grown),
            other => panic!("expected a tree, found {:?}", other.kind()),
        }
    }

    #[test]
    fn test_apple_replacement_applied_once() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut world = World::new(dim());
        let pos = GridPoint::new(10, 5);
        world.set_block(pos, Cell::Apple(Apple::new(pos, 0)));

        let mut applied = 0;
        for now in 0..120 {
            for replacement in world.update(now) {
                assert_eq!(now, Apple::EXPIRE_AFTER);
                if world.apply(replacement, now, &mut rng) {
                    applied += 1;
                }
            }
        }

        assert_eq!(applied, 1);
        assert_eq!(world.count(Kind::Apple), 0);
        assert_eq!(world.positions_of(Kind::Tree).collect::<Vec<_>>(), vec![pos]);
    }

    #[test]
    fn test_sweep_order() {
        let mut world = World::new(dim());
        let early = GridPoint::new(20, 0);
        let tile = GridPoint::new(3, 1);
        // terrain and block apples on the same tile, told apart by the
        // position they report in their replacement requests
        let terrain_marker = GridPoint::new(0, 9);
        let block_marker = GridPoint::new(1, 9);
        world.set_block(early, Cell::Apple(Apple::new(early, 0)));
        let grass = world.set_terrain(tile, Cell::Apple(Apple::new(terrain_marker, 0)));
        assert_eq!(grass.kind(), Kind::Grass);
        world.set_block(tile, Cell::Apple(Apple::new(block_marker, 0)));

        let order: Vec<_> = world
            .update(Apple::EXPIRE_AFTER)
            .into_iter()
            .map(|replacement| replacement.pos)
            .collect();
        assert_eq!(order, vec![early, terrain_marker, block_marker]);
        assert_eq!(world.terrain(tile).kind(), Kind::Apple);
    }

    #[test]
    fn test_stale_replacement_ignored() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut world = World::new(dim());
        let pos = GridPoint::new(10, 5);
        let replacement = Replacement { pos, expected: Kind::Apple, seed: Seed::Sapling };
        assert!(!world.apply(replacement, 0, &mut rng));
        assert!(world.block(pos).is_empty());
    }
}
