use std::ops::Range;

use rand::Rng;
use static_assertions::const_assert;

use crate::basic::Ticks;
use crate::cell::AtlasIndex;

/// Lifecycle of a tree, only ever moves forward
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display)]
pub enum TreeState {
    Sapling,
    Grown,
    Dead,
}

#[derive(Clone, Debug)]
pub struct Tree {
    state: TreeState,
    /// When the tree entered its current state
    last_transition: Ticks,
    /// How long the tree stays grown, drawn once
    adult_lifetime: Ticks,
}

impl Tree {
    pub const SAPLING_DURATION: Ticks = 30;
    pub const ADULT_LIFETIME: Range<Ticks> = 400..2400;

    pub fn new(state: TreeState, now: Ticks, rng: &mut impl Rng) -> Self {
        Self::with_lifetime(state, now, rng.gen_range(Self::ADULT_LIFETIME))
    }

    pub fn with_lifetime(state: TreeState, now: Ticks, adult_lifetime: Ticks) -> Self {
        Self {
            state,
            last_transition: now,
            adult_lifetime,
        }
    }

    pub fn state(&self) -> TreeState {
        self.state
    }

    pub fn adult_lifetime(&self) -> Ticks {
        self.adult_lifetime
    }

    pub fn last_transition(&self) -> Ticks {
        self.last_transition
    }

    /// Only a grown tree blocks the snake
    pub fn is_collidable(&self) -> bool {
        self.state == TreeState::Grown
    }

    pub fn update(&mut self, now: Ticks) {
        let elapsed = now.saturating_sub(self.last_transition);
        match self.state {
            TreeState::Sapling if elapsed >= Self::SAPLING_DURATION => {
                self.state = TreeState::Grown;
                self.last_transition = now;
            }
            TreeState::Grown if elapsed >= self.adult_lifetime => {
                self.state = TreeState::Dead;
                self.last_transition = now;
            }
            _ => {}
        }
    }

    pub fn texture(&self) -> AtlasIndex {
        match self.state {
            TreeState::Sapling => AtlasIndex::new(3, 3),
            TreeState::Grown => AtlasIndex::new(4, 3),
            TreeState::Dead => AtlasIndex::new(5, 3),
        }
    }
}

const_assert!(Tree::SAPLING_DURATION > 0);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sapling_grows_exactly_on_time() {
        let created = 100;
        let mut tree = Tree::with_lifetime(TreeState::Sapling, created, 500);

        for now in created..created + Tree::SAPLING_DURATION {
            tree.update(now);
            assert_eq!(tree.state(), TreeState::Sapling, "grew early at {}", now);
            assert!(!tree.is_collidable());
        }

        tree.update(created + Tree::SAPLING_DURATION);
        assert_eq!(tree.state(), TreeState::Grown);
        assert!(tree.is_collidable());
        assert_eq!(tree.last_transition(), created + Tree::SAPLING_DURATION);
    }

    #[test]
    fn test_grown_tree_dies_after_lifetime() {
        let grown_at = 30;
        let lifetime = 450;
        let mut tree = Tree::with_lifetime(TreeState::Sapling, 0, lifetime);

        for now in 0..grown_at + lifetime {
            tree.update(now);
        }
        assert_eq!(tree.state(), TreeState::Grown);
        assert_eq!(tree.adult_lifetime(), lifetime);

        tree.update(grown_at + lifetime);
        assert_eq!(tree.state(), TreeState::Dead);
        assert!(!tree.is_collidable());

        // dead is final
        for now in grown_at + lifetime..grown_at + lifetime + 5_000 {
            tree.update(now);
            assert_eq!(tree.state(), TreeState::Dead);
        }
    }

    #[test]
    fn test_random_lifetime_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let tree = Tree::new(TreeState::Grown, 0, &mut rng);
            assert!(Tree::ADULT_LIFETIME.contains(&tree.adult_lifetime()));
        }
    }

    #[test]
    fn test_textures_per_state() {
        let sapling = Tree::with_lifetime(TreeState::Sapling, 0, 400).texture();
        let grown = Tree::with_lifetime(TreeState::Grown, 0, 400).texture();
        let dead = Tree::with_lifetime(TreeState::Dead, 0, 400).texture();
        assert_ne!(sapling, grown);
        assert_ne!(grown, dead);
        assert_ne!(sapling, dead);
    }
}
