use crate::basic::{Dir, GridDim, GridPoint, Ticks};

pub type Score = u32;

#[derive(Clone, Debug)]
pub struct Prefs {
    pub board_dim: GridDim,

    pub spawn_pos: GridPoint,
    pub spawn_dir: Dir,
    pub spawn_len: usize,

    /// Trees and rocks placed at the start of a game
    pub object_count: usize,
    pub object_spacing: usize,
    /// Random samples per object before world generation scans the board
    pub generation_attempts: usize,

    pub eat_reward: Score,
    pub chop_reward: Score,

    /// How long the eat/chop glyph stays up
    pub status_ticks: Ticks,

    /// Fixed seed for reproducible games, taken from the OS otherwise
    pub seed: Option<u64>,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            board_dim: GridPoint::new(24, 13),

            spawn_pos: GridPoint::new(5, 2),
            spawn_dir: Dir::Right,
            spawn_len: 4,

            object_count: 10,
            object_spacing: 3,
            generation_attempts: 10_000,

            eat_reward: 7,
            chop_reward: 2,

            status_ticks: 5,

            seed: None,
        }
    }
}

// builder
impl Prefs {
    pub fn board_dim(mut self, board_dim: GridDim) -> Self {
        self.board_dim = board_dim;
        self
    }

    pub fn spawn(mut self, pos: GridPoint, dir: Dir, len: usize) -> Self {
        self.spawn_pos = pos;
        self.spawn_dir = dir;
        self.spawn_len = len;
        self
    }

    pub fn objects(mut self, count: usize, spacing: usize) -> Self {
        self.object_count = count;
        self.object_spacing = spacing;
        self
    }

    pub fn generation_attempts(mut self, attempts: usize) -> Self {
        self.generation_attempts = attempts;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
