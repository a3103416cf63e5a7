//! Game state snapshot — the complete visible state for the
//! presentation layer, built once per tick after the step completes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::SimTime;

/// Complete read-only view of the simulation after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: u32,
    pub level: u32,
    pub score: u32,
    pub grid: GridView,
    pub base: BaseView,
    pub player: PlayerView,
    pub opponents: Vec<OpponentView>,
    pub projectiles: Vec<ProjectileView>,
    pub powerups: Vec<PowerUpView>,
    pub fuel_cans: Vec<FuelCanView>,
    pub effects: Vec<EffectView>,
    /// Audio events raised during this tick, drained into the snapshot.
    pub audio_events: Vec<AudioEvent>,
}

/// Terrain cells, row-major.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridView {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Tile>,
}

/// Base status for the HUD and shield rendering.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BaseView {
    pub tile: (usize, usize),
    pub shielded: bool,
    pub shield_timer: u32,
}

/// Player vehicle and HUD fields.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub dir: Direction,
    pub turret_angle: f32,
    pub level: u8,
    pub lives: u32,
    pub fuel: f32,
    pub max_fuel: f32,
    pub alive: bool,
    pub invulnerable: bool,
    pub track_phase: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OpponentView {
    pub pos: Vec2,
    pub dir: Direction,
    pub turret_angle: f32,
    pub track_phase: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    pub owner: ProjectileOwner,
    pub size: f32,
    pub level: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUpView {
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub timer: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FuelCanView {
    pub pos: Vec2,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: EffectKind,
    pub pos: Vec2,
    pub timer: i32,
}
