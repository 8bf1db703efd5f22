use itertools::Itertools;

use crate::basic::GridDim;
use crate::cell::{AtlasIndex, Cell, Kind};
use crate::color::Color;
use crate::prefs::Score;

/// What a renderer needs to know about one tile of one layer
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CellView {
    pub kind: Kind,
    pub texture: AtlasIndex,
    pub background: Color,
    pub label: Option<String>,
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        Self {
            kind: cell.kind(),
            texture: cell.texture(),
            background: cell.background(),
            label: cell.debug_label(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hud {
    pub score: Score,
    pub status: &'static str,
    pub game_over: bool,
    pub paused: bool,
}

/// Read-only copy of the game state taken after a step
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub board_dim: GridDim,
    /// Row-major
    pub terrain: Vec<CellView>,
    /// Row-major
    pub block: Vec<CellView>,
    pub hud: Hud,
}

impl Snapshot {
    /// One character per tile, for terminals and logs
    pub fn to_text(&self) -> String {
        let board = self
            .block
            .chunks(self.board_dim.x as usize)
            .map(|row| row.iter().map(|view| symbol(view)).collect::<String>())
            .join("\n");

        let mut flags = vec![];
        if self.hud.game_over {
            flags.push("GAME OVER");
        }
        if self.hud.paused {
            flags.push("PAUSED");
        }

        format!(
            "{} score: {} {}\n{}",
            self.hud.status,
            self.hud.score,
            flags.join(" "),
            board
        )
    }
}

fn symbol(view: &CellView) -> char {
    match view.kind {
        Kind::Empty => '.',
        Kind::Grass => ',',
        Kind::Dirt => '_',
        Kind::Rock => '#',
        // blinking apples show up as a lowercase o every other period
        Kind::Apple if view.background.is_transparent() => 'O',
        Kind::Apple => 'o',
        Kind::Tree => match view.label.as_deref() {
            Some("Sapling") => 't',
            Some("Dead") => 'x',
            _ => 'T',
        },
        Kind::SnakeHead => '@',
        Kind::SnakeBody => '=',
        Kind::SnakeTail => '~',
    }
}
