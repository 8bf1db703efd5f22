use crate::basic::Ticks;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Glyph {
    Idle,
    Eating,
    Chopping,
    Dead,
    BoardFull,
}

impl Glyph {
    pub fn as_str(self) -> &'static str {
        match self {
            Glyph::Idle => "🐍",
            Glyph::Eating => "🍴",
            Glyph::Chopping => "🪓",
            Glyph::Dead => "💀",
            Glyph::BoardFull => "🏆",
        }
    }

    /// Goes back to idle on its own
    fn is_transient(self) -> bool {
        matches!(self, Glyph::Eating | Glyph::Chopping)
    }
}

/// The short status shown next to the score
#[derive(Copy, Clone, Debug)]
pub struct Status {
    glyph: Glyph,
    since: Ticks,
}

impl Default for Status {
    fn default() -> Self {
        Self { glyph: Glyph::Idle, since: 0 }
    }
}

impl Status {
    pub fn glyph(&self) -> Glyph {
        self.glyph
    }

    pub fn set(&mut self, glyph: Glyph, now: Ticks) {
        self.glyph = glyph;
        self.since = now;
    }

    pub fn update(&mut self, now: Ticks, duration: Ticks) {
        if self.glyph.is_transient() && now.saturating_sub(self.since) >= duration {
            self.glyph = Glyph::Idle;
        }
    }
}

#[test]
fn test_status_reverts() {
    let mut status = Status::default();
    status.set(Glyph::Eating, 10);
    status.update(14, 5);
    assert_eq!(status.glyph(), Glyph::Eating);
    status.update(15, 5);
    assert_eq!(status.glyph(), Glyph::Idle);

    status.set(Glyph::Dead, 20);
    status.update(1_000, 5);
    assert_eq!(status.glyph(), Glyph::Dead);
}
