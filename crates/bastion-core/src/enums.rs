//! Enumeration types used throughout the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Terrain cell codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Passable ground.
    #[default]
    Empty,
    /// Indestructible wall; forms the arena border.
    Steel,
    /// Destructible wall; a projectile hit converts it to `Empty`.
    Brick,
    /// Blocks vehicles and nothing else.
    Water,
    /// Passable cover; vehicles underneath render concealed.
    Grass,
    /// The defended objective. Exactly one per level.
    Base,
}

impl Tile {
    /// Whether this cell stops vehicle movement.
    pub fn blocks(self) -> bool {
        matches!(self, Tile::Steel | Tile::Brick | Tile::Water | Tile::Base)
    }
}

/// Cardinal facing for vehicles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Turret angle for this facing, in radians. Screen coordinates:
    /// x grows right, y grows down, so Up is -PI/2.
    pub fn angle(self) -> f32 {
        match self {
            Direction::Up => -std::f32::consts::FRAC_PI_2,
            Direction::Right => 0.0,
            Direction::Down => std::f32::consts::FRAC_PI_2,
            Direction::Left => std::f32::consts::PI,
        }
    }

    /// Unit step vector in world coordinates.
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }

    /// Facing for an index 0..4 (wraps).
    pub fn from_index(index: usize) -> Direction {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// Which side fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

/// Power-up variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Upgrades the player one level; at the cap, grants a life instead.
    Star,
    /// Arms the base shield for its full duration.
    Shield,
}

/// Transient visual effect variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    Explosion,
    Flash,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    BaseDestroyed,
    LivesExhausted,
    FuelExhausted,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Active,
    Paused,
    GameOver(GameOverReason),
}
