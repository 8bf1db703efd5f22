use std::fmt::{Display, Formatter};

use rand::Rng;

pub use event::{Event, EventSink};
pub use game_context::GameContext;
pub use snapshot::{CellView, Hud, Snapshot};
pub use status::{Glyph, Status};

use crate::basic::{board, Dir, GridPoint, Ticks};
use crate::cell::{Apple, Cell};
use crate::error::{Error, ErrorConversion, Result};
use crate::prefs::{Prefs, Score};
use crate::snake::{self, Outcome, Snake};
use crate::snake_control::Controller;
use crate::world::{self, generate, World};

mod event;
mod game_context;
mod snapshot;
mod status;

#[derive(Debug, Error)]
#[must_use]
pub struct NoSpaceForFoodError {
    pub tiles: usize,
}

impl Display for NoSpaceForFoodError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "no space left for food, all {} tiles are taken", self.tiles)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    Playing,
    /// The snake crashed, nothing moves until a restart
    GameOver,
    /// Nowhere to put the next apple, nothing moves until a restart
    BoardFull,
}

/// Put an apple on a random empty tile not covered by the snake
fn place_food(
    world: &mut World,
    snake: &Snake,
    now: Ticks,
    rng: &mut impl Rng,
) -> std::result::Result<GridPoint, NoSpaceForFoodError> {
    let pos = board::random_free_spot(
        world.dim(),
        |pos| world.block(pos).is_empty() && !snake.occupies(pos),
        rng,
    )
    .ok_or(NoSpaceForFoodError { tiles: world.dim().area() })?;

    log::debug!("placing food at {:?}", pos);
    world.set_block(pos, Cell::Apple(Apple::new(pos, now)));
    Ok(pos)
}

pub struct Game {
    gtx: GameContext,
    world: World,
    snake: Snake,
    /// Direction the snake takes on the next step
    heading: Dir,
    score: Score,
    status: Status,
    phase: Phase,
    paused: bool,
}

impl Game {
    pub fn new(prefs: Prefs) -> Result<Self> {
        let mut gtx = GameContext::new(prefs);
        let (world, snake) = Self::setup(&mut gtx).with_trace_step("Game::new")?;
        let heading = snake.dir();
        Ok(Self {
            gtx,
            world,
            snake,
            heading,
            score: 0,
            status: Status::default(),
            phase: Phase::Playing,
            paused: false,
        })
    }

    fn setup(gtx: &mut GameContext) -> Result<(World, Snake)> {
        gtx.clock.reset();
        let now = gtx.clock.now();
        let board_dim = gtx.prefs.board_dim;

        let mut world = World::try_new(board_dim)?;
        let snake = snake::Builder::default()
            .pos(gtx.prefs.spawn_pos)
            .dir(gtx.prefs.spawn_dir)
            .len(gtx.prefs.spawn_len)
            .build(board_dim)?;
        snake.write_to(&mut world);

        let params = generate::Params {
            count: gtx.prefs.object_count,
            spacing: gtx.prefs.object_spacing,
            clear_row: gtx.prefs.spawn_pos.y,
            attempts: gtx.prefs.generation_attempts,
        };
        world::generate(&mut world, &params, now, &mut gtx.rng)?;
        place_food(&mut world, &snake, now, &mut gtx.rng)?;

        log::info!(
            "new game on a {}x{} board with {} obstacles",
            board_dim.x,
            board_dim.y,
            params.count
        );
        Ok((world, snake))
    }

    /// Start over with a freshly generated world, the tick count starts at 0
    pub fn restart(&mut self) -> Result {
        let (world, snake) = Self::setup(&mut self.gtx).with_trace_step("Game::restart")?;
        self.heading = snake.dir();
        self.world = world;
        self.snake = snake;
        self.score = 0;
        self.status = Status::default();
        self.phase = Phase::Playing;
        self.paused = false;
        Ok(())
    }

    /// Buffer a direction for the next step, reversing or "turning" onto
    /// the current axis is ignored, returns whether the turn was accepted
    pub fn steer(&mut self, dir: Dir) -> bool {
        if self.snake.dir().can_turn_to(dir) {
            self.heading = dir;
            true
        } else {
            log::trace!("ignoring turn from {:?} to {:?}", self.snake.dir(), dir);
            false
        }
    }

    /// Ask a controller where to go and steer accordingly
    pub fn control(&mut self, controller: &mut dyn Controller) -> bool {
        match controller.next_dir(&self.snake, &self.world) {
            Some(dir) => self.steer(dir),
            None => false,
        }
    }

    /// Returns the paused state after toggling, only a running game can be paused
    pub fn toggle_pause(&mut self) -> bool {
        if self.phase == Phase::Playing {
            self.paused = !self.paused;
        }
        self.paused
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) -> Result<Vec<Event>> {
        let mut events = vec![];
        self.step_with(&mut events)?;
        Ok(events)
    }

    pub fn step_with(&mut self, sink: &mut impl EventSink) -> Result {
        if self.paused || self.phase != Phase::Playing {
            return Ok(());
        }

        let now = self.gtx.now();
        self.snake.set_dir(self.heading);

        match self.snake.advance(&mut self.world) {
            Outcome::Moved => {}
            Outcome::Ate => {
                self.score += self.gtx.prefs.eat_reward;
                self.status.set(Glyph::Eating, now);
                sink.emit(Event::Eat);
                self.place_food().with_trace_step("eat")?;
            }
            Outcome::Chopped => {
                self.score += self.gtx.prefs.chop_reward;
                self.status.set(Glyph::Chopping, now);
                sink.emit(Event::Chop);
            }
            Outcome::Crashed => {
                self.phase = Phase::GameOver;
                self.status.set(Glyph::Dead, now);
                sink.emit(Event::Death);
                log::info!("game over at tick {} with a score of {}", now, self.score);
            }
        }

        for replacement in self.world.update(now) {
            if self.world.apply(replacement, now, &mut self.gtx.rng) {
                log::debug!("apple at {:?} went bad", replacement.pos);
                sink.emit(Event::AppleExpired);
                self.place_food().with_trace_step("apple expired")?;
            }
        }

        self.status.update(now, self.gtx.prefs.status_ticks);
        self.gtx.clock.advance();
        Ok(())
    }

    fn place_food(&mut self) -> Result<GridPoint> {
        place_food(&mut self.world, &self.snake, self.gtx.now(), &mut self.gtx.rng).map_err(|e| {
            log::warn!("{}", e);
            self.phase = Phase::BoardFull;
            self.status.set(Glyph::BoardFull, self.gtx.now());
            Error::from(e).with_trace_step("place_food")
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board_dim: self.world.dim(),
            terrain: self.world.terrain_cells().iter().map(CellView::from).collect(),
            block: self.world.block_cells().iter().map(CellView::from).collect(),
            hud: Hud {
                score: self.score,
                status: self.status.glyph().as_str(),
                game_over: self.phase == Phase::GameOver,
                paused: self.paused,
            },
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn heading(&self) -> Dir {
        self.heading
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn status(&self) -> Glyph {
        self.status.glyph()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn now(&self) -> Ticks {
        self.gtx.now()
    }

    pub fn prefs(&self) -> &Prefs {
        &self.gtx.prefs
    }
}
