use std::fmt::{Display, Formatter};

/// Things worth a sound effect, emitted by `Game::step`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Event {
    Eat,
    Chop,
    Death,
    AppleExpired,
}

impl Event {
    pub fn name(self) -> &'static str {
        match self {
            Event::Eat => "eat",
            Event::Chop => "chop",
            Event::Death => "death",
            Event::AppleExpired => "apple-expired",
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Consumer of events, e.g. an audio player
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event)
    }
}
