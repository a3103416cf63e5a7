//! Player commands and the per-frame input sample.
//!
//! Meta commands are queued and processed at the next tick boundary.
//! Directional and fire intent is sampled fresh each tick via
//! [`InputState`]; the engine derives the fire edge itself.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// Meta actions sent from the host to the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a fresh run: new map, full fuel, first wave.
    NewGame,
    /// Pause the simulation.
    Pause,
    /// Resume from pause.
    Resume,
}

/// Current boolean state of the input device, read once per tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Raw fire button state; the engine edge-triggers on it.
    pub fire: bool,
}

impl InputState {
    /// The single direction honored this frame. Priority when several
    /// are held: up, down, left, right.
    pub fn held_direction(&self) -> Option<Direction> {
        if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}
