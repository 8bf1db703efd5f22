use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::basic::{TickClock, Ticks};
use crate::prefs::Prefs;

/// Everything the simulation shares between its parts, passed around
/// explicitly so that games don't interfere with each other
pub struct GameContext {
    pub prefs: Prefs,
    pub clock: TickClock,
    pub rng: StdRng,
}

impl GameContext {
    pub fn new(prefs: Prefs) -> Self {
        let rng = match prefs.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            prefs,
            clock: TickClock::default(),
            rng,
        }
    }

    pub fn now(&self) -> Ticks {
        self.clock.now()
    }
}
