//! Gap Flyer headless runner
//!
//! Runs the simulation on a fixed timestep with the autopilot at the controls
//! and logs what happens. Usage:
//!
//! ```text
//! gap-flyer [settings.json] [--seed N] [--seconds S]
//! ```

use std::path::PathBuf;

use clap::Parser;
use gap_flyer::Settings;
use gap_flyer::consts::*;
use gap_flyer::sim::{GameEvent, GameState, TickInput, tick};

/// Simulated frame length fed to the runner (60 Hz display)
const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run Gap Flyer headless with the autopilot")]
struct Args {
    /// Settings JSON file (defaults are used when omitted)
    settings: Option<PathBuf>,
    /// RNG seed for obstacle offsets
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Simulated seconds to run
    #[arg(long, default_value_t = 60.0)]
    seconds: f32,
}

/// Fixed-timestep driver around the simulation
struct Runner {
    state: GameState,
    accumulator: f32,
    input: TickInput,
    best_score: u64,
    games: u32,
}

impl Runner {
    fn new(seed: u64, settings: Settings) -> Self {
        Self {
            state: GameState::new(seed, settings),
            accumulator: 0.0,
            input: TickInput {
                autopilot: true,
                ..Default::default()
            },
            best_score: 0,
            games: 1,
        }
    }

    /// Run simulation ticks for one frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let events = tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.tap = false;

            for event in events {
                self.on_event(event);
            }
        }
    }

    fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Spawned(pair) => {
                log::debug!("Obstacle pair at offset {:.1}", pair.offset);
            }
            GameEvent::Scored { score } => {
                self.best_score = self.best_score.max(score);
            }
            GameEvent::GameOver { score } => {
                log::info!(
                    "Game {} over at {:.1}s: {} ({})",
                    self.games,
                    self.state.clock(),
                    score,
                    self.state.message().unwrap_or_default()
                );
            }
            GameEvent::Reset => {
                self.games += 1;
            }
            GameEvent::Flapped => {}
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    log::info!("Gap Flyer (headless) starting with seed {}", args.seed);
    let mut runner = Runner::new(args.seed, settings);

    let frames = (args.seconds / FRAME_DT).max(0.0) as u64;
    for _ in 0..frames {
        runner.update(FRAME_DT);
    }

    println!(
        "{} ticks, {} game(s), best score {}, current score {} ({:?})",
        runner.state.ticks(),
        runner.games,
        runner.best_score,
        runner.state.score(),
        runner.state.phase()
    );
}
