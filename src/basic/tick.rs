/// Discrete simulation steps, the only unit of time the simulation knows
pub type Ticks = u64;

/// Monotonic step counter, owned by the game context rather than being global
/// so that independent simulations can coexist
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TickClock {
    tick: Ticks,
}

impl TickClock {
    pub fn now(&self) -> Ticks {
        self.tick
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }

    pub fn reset(&mut self) {
        self.tick = 0;
    }
}

#[test]
fn test_tick_clock() {
    let mut clock = TickClock::default();
    assert_eq!(clock.now(), 0);
    clock.advance();
    clock.advance();
    assert_eq!(clock.now(), 2);
    clock.reset();
    assert_eq!(clock.now(), 0);
}
