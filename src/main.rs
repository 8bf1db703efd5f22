use log::{error, info, warn};
use simplelog::{Config, LevelFilter, SimpleLogger};

use grove_snake::snake_control::Autopilot;
use grove_snake::{Game, Prefs};

struct MainArgs {
    prefs: Prefs,
    max_ticks: u64,
    frame_every: u64,
    verbose: bool,
}

fn parse_args() -> Result<MainArgs, String> {
    let args: Vec<String> = std::env::args().collect();
    let mut main_args = MainArgs {
        prefs: Prefs::default(),
        max_ticks: 1_000,
        frame_every: 50,
        verbose: false,
    };

    let number = |i: usize, flag: &str| -> Result<u64, String> {
        args.get(i)
            .ok_or_else(|| format!("{flag} requires a value"))?
            .parse()
            .map_err(|_| format!("{flag} requires a non-negative integer"))
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                main_args.prefs = main_args.prefs.seed(number(i, "--seed")?);
            }
            "--ticks" => {
                i += 1;
                main_args.max_ticks = number(i, "--ticks")?;
            }
            "--frames" => {
                i += 1;
                main_args.frame_every = number(i, "--frames")?.max(1);
            }
            "--verbose" => main_args.verbose = true,
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(main_args)
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: grove_snake [--seed N] [--ticks N] [--frames N] [--verbose]");
            std::process::exit(2);
        }
    };

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = SimpleLogger::init(level, Config::default()) {
        eprintln!("failed to initialize logger: {e}");
    }

    let mut game = match Game::new(args.prefs) {
        Ok(game) => game,
        Err(e) => {
            error!("could not start a game: {}", e);
            std::process::exit(1);
        }
    };

    let mut autopilot = Autopilot;
    while game.now() < args.max_ticks {
        game.control(&mut autopilot);
        match game.step() {
            Ok(events) => {
                for event in events {
                    info!("tick {}: {} (score {})", game.now(), event, game.score());
                }
            }
            Err(e) => {
                warn!("simulation stopped: {}", e);
                break;
            }
        }

        if game.is_game_over() {
            break;
        }
        if game.now() % args.frame_every == 0 {
            println!("{}\n", game.snapshot().to_text());
        }
    }

    println!("{}", game.snapshot().to_text());
    info!("finished after {} ticks with a score of {}", game.now(), game.score());
}
