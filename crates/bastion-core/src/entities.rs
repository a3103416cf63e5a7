//! Entity state records.
//!
//! Entities are plain data structs with no behavior beyond small
//! constructors. Update rules live in the sim systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{Direction, EffectKind, PowerUpKind, ProjectileOwner};
use crate::types::tile_center;

/// The player vehicle. Persists across waves and levels; position resets
/// on death, everything else carries over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub dir: Direction,
    /// Continuous turret angle (radians), eased toward the facing angle.
    pub turret_angle: f32,
    pub speed: f32,
    /// Collision box edge; also the projectile hit radius.
    pub size: f32,
    /// Ticks until the next shot is allowed.
    pub reload: u32,
    pub lives: u32,
    /// Upgrade level 1..=PLAYER_MAX_LEVEL.
    pub level: u8,
    pub score: u32,
    pub alive: bool,
    /// Remaining invulnerability window (ticks).
    pub invuln: u32,
    /// Ticks until a dead player reappears at the spawn tile.
    pub respawn_timer: u32,
    pub spawn_tile: (usize, usize),
    /// Fuel remaining, 0..=MAX_FUEL.
    pub fuel: f32,
    /// Tread animation counter, advanced on each committed move.
    pub track_phase: u8,
}

impl Player {
    /// Fresh player at the given spawn tile with full fuel and lives.
    pub fn at_spawn(spawn_tile: (usize, usize)) -> Self {
        Self {
            pos: tile_center(spawn_tile),
            dir: Direction::Up,
            turret_angle: Direction::Up.angle(),
            speed: PLAYER_BASE_SPEED,
            size: PLAYER_SIZE,
            reload: 0,
            lives: PLAYER_LIVES,
            level: 1,
            score: 0,
            alive: true,
            invuln: 0,
            respawn_timer: 0,
            spawn_tile,
            fuel: MAX_FUEL,
            track_phase: 0,
        }
    }

    /// World position of the spawn tile center.
    pub fn spawn_pos(&self) -> Vec2 {
        tile_center(self.spawn_tile)
    }
}

/// An AI opponent. Created per spawn call, removed the frame it dies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Opponent {
    pub pos: Vec2,
    pub dir: Direction,
    pub turret_angle: f32,
    /// Per-unit speed, fixed at spawn time.
    pub speed: f32,
    pub size: f32,
    /// Ticks until the random-walk controller reselects a direction.
    pub move_timer: i32,
    /// Ticks until the next fire roll.
    pub reload: i32,
    pub alive: bool,
    pub track_phase: u8,
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Fixed travel angle (radians).
    pub angle: f32,
    /// Distance traveled per tick.
    pub speed: f32,
    /// Remaining range budget; the projectile dies when it reaches zero.
    pub range: f32,
    pub owner: ProjectileOwner,
    /// Damage/size level inherited from the firing vehicle.
    pub level: u8,
    pub size: f32,
    pub alive: bool,
}

/// A dropped power-up waiting to be picked up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub pos: Vec2,
    /// Remaining lifetime; expires unpicked at zero.
    pub timer: i32,
    pub alive: bool,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, pos: Vec2) -> Self {
        let timer = match kind {
            PowerUpKind::Star => STAR_LIFETIME,
            PowerUpKind::Shield => SHIELD_LIFETIME,
        };
        Self {
            kind,
            pos,
            timer,
            alive: true,
        }
    }
}

/// A fuel can. Never expires on its own; removed on pickup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FuelCan {
    pub pos: Vec2,
    pub alive: bool,
}

/// Shield and destruction status of the defended base.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BaseState {
    pub shielded: bool,
    /// Remaining shield duration (ticks); never negative.
    pub timer: u32,
    /// Set by an unshielded hit; consumed by the end-of-step check.
    pub destroyed: bool,
}

impl BaseState {
    /// Arm (or re-arm) the shield for its full duration. No stacking.
    pub fn arm_shield(&mut self) {
        self.shielded = true;
        self.timer = SHIELD_DURATION;
    }
}

/// Transient visual effect for the presentation layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub pos: Vec2,
    pub timer: i32,
}

impl Effect {
    pub fn explosion(pos: Vec2, timer: i32) -> Self {
        Self {
            kind: EffectKind::Explosion,
            pos,
            timer,
        }
    }

    pub fn flash(pos: Vec2, timer: i32) -> Self {
        Self {
            kind: EffectKind::Flash,
            pos,
            timer,
        }
    }
}
