//! State shared between the host thread and the game loop thread.

use std::sync::{Arc, Mutex};

use bastion_core::commands::{InputState, PlayerCommand};
use bastion_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Input cell written by the host, sampled by the loop once per tick.
pub type SharedInput = Arc<Mutex<InputState>>;

/// Latest snapshot, updated by the game loop thread after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;
