#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;

pub mod basic;
pub mod cell;
pub mod color;
pub mod error;
pub mod game;
pub mod prefs;
pub mod snake;
pub mod snake_control;
pub mod world;

pub use error::{Error, Result};
pub use game::{Event, Game, Phase, Snapshot};
pub use prefs::Prefs;
