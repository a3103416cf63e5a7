//! BASTION headless host.
//!
//! Drives the simulation at the fixed tick rate on a background thread
//! and reports run progress on the log. A renderer attaches by polling
//! the shared snapshot cell; none is required to exercise the engine.

mod game_loop;
mod state;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;

use bastion_core::commands::PlayerCommand;
use bastion_core::enums::GamePhase;

use crate::state::GameLoopCommand;

#[derive(Parser, Debug)]
#[command(name = "bastion", about = "Headless BASTION simulation host")]
struct Args {
    /// RNG seed for the simulation. Same seed = same run.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many ticks (default: run until game over).
    #[arg(long)]
    ticks: Option<u64>,

    /// Print the final snapshot as JSON on exit.
    #[arg(long)]
    dump_final: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let input = state::SharedInput::default();
    let latest: state::SharedSnapshot = Arc::new(Mutex::new(None));
    let cmd_tx = game_loop::spawn_game_loop(args.seed, Arc::clone(&input), Arc::clone(&latest));

    cmd_tx
        .send(GameLoopCommand::Player(PlayerCommand::NewGame))
        .expect("game loop unavailable");
    log::info!("simulation started (seed {})", args.seed);

    let mut last_level = 0;
    let mut last_wave = 0;
    let final_snapshot = loop {
        std::thread::sleep(Duration::from_millis(250));
        let Some(snap) = latest.lock().ok().and_then(|s| s.clone()) else {
            continue;
        };

        if snap.level != last_level || snap.wave != last_wave {
            last_level = snap.level;
            last_wave = snap.wave;
            log::info!(
                "level {} wave {} | score {} lives {} fuel {:.0}%",
                snap.level,
                snap.wave,
                snap.score,
                snap.player.lives,
                snap.player.fuel
            );
        }

        if let GamePhase::GameOver(reason) = snap.phase {
            log::info!(
                "game over after {} ticks: {:?} (score {})",
                snap.time.tick,
                reason,
                snap.score
            );
            break snap;
        }
        if args.ticks.is_some_and(|budget| snap.time.tick >= budget) {
            log::info!("tick budget reached at tick {}", snap.time.tick);
            break snap;
        }
    };

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);

    if args.dump_final {
        match serde_json::to_string_pretty(&final_snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("failed to serialize final snapshot: {err}"),
        }
    }
}
