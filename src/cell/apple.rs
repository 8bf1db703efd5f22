use static_assertions::const_assert;

use crate::basic::{GridPoint, Ticks};
use crate::cell::{AtlasIndex, Kind, Replacement, Seed};
use crate::color::{Color, APPLE_BLINK_COLOR};

/// Food, starts blinking as it gets old and eventually rots into a sapling
#[derive(Clone, Debug)]
pub struct Apple {
    /// The only cell that remembers where it is, it needs to
    /// address its replacement request
    pos: GridPoint,
    created: Ticks,
    age: Ticks,
    blink_tick: Ticks,
    blink_on: bool,
    expired: bool,
}

impl Apple {
    pub const BLINK_AFTER: Ticks = 30;
    pub const EXPIRE_AFTER: Ticks = 60;
    /// Ticks between blink toggles
    pub const BLINK_PERIOD: Ticks = 5;

    pub const TEXTURE: AtlasIndex = AtlasIndex::new(2, 3);

    pub fn new(pos: GridPoint, now: Ticks) -> Self {
        Self {
            pos,
            created: now,
            age: 0,
            blink_tick: 0,
            blink_on: false,
            expired: false,
        }
    }

    pub fn pos(&self) -> GridPoint {
        self.pos
    }

    pub fn created(&self) -> Ticks {
        self.created
    }

    /// Age as of the last update
    pub fn age(&self) -> Ticks {
        self.age
    }

    pub fn is_blinking(&self) -> bool {
        self.blink_on
    }

    pub fn background(&self) -> Color {
        if self.blink_on {
            *APPLE_BLINK_COLOR
        } else {
            Color::TRANSPARENT
        }
    }

    /// Requests to be replaced by a sapling exactly once, on the first update
    /// at which it is old enough
    pub fn update(&mut self, now: Ticks) -> Option<Replacement> {
        self.age = now.saturating_sub(self.created);

        if self.age >= Self::EXPIRE_AFTER {
            if self.expired {
                return None;
            }
            self.expired = true;
            return Some(Replacement {
                pos: self.pos,
                expected: Kind::Apple,
                seed: Seed::Sapling,
            });
        }

        if self.age >= Self::BLINK_AFTER {
            self.blink_tick += 1;
            if self.blink_tick >= Self::BLINK_PERIOD {
                self.blink_tick = 0;
                self.blink_on = !self.blink_on;
            }
        }

        None
    }
}

const_assert!(Apple::BLINK_AFTER < Apple::EXPIRE_AFTER);
const_assert!(Apple::BLINK_PERIOD > 0);
