//! Events emitted by the simulation for audio and UI feedback.
//!
//! Fire-and-forget: the engine buffers these during a step and drains
//! them into the snapshot. The core never calls collaborators directly.

use serde::{Deserialize, Serialize};

use crate::enums::{PowerUpKind, ProjectileOwner};

/// Audio events for the frontend sound system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A vehicle fired a projectile.
    ShotFired { owner: ProjectileOwner },
    /// A brick tile was destroyed.
    BrickDestroyed,
    /// A projectile bounced off the shielded base.
    ShieldDeflection,
    /// An opponent was destroyed by player fire.
    OpponentDestroyed,
    /// The player absorbed a hit by dropping an upgrade level.
    PlayerHit,
    /// The player lost a life.
    PlayerDestroyed,
    /// A power-up was picked up.
    PowerUpCollected { kind: PowerUpKind },
    /// A fuel can was picked up.
    FuelCollected,
    /// The map regenerated for a new level.
    LevelAdvanced { level: u32 },
}
