//! Fundamental simulation types and geometry helpers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{TICK_RATE, TILE_SIZE};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// World-space center of a tile.
pub fn tile_center((x, y): (usize, usize)) -> Vec2 {
    Vec2::new(
        x as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        y as f32 * TILE_SIZE + TILE_SIZE / 2.0,
    )
}

/// Tile coordinates covering a world position. May be negative or past
/// the grid for positions outside the arena.
pub fn tile_of(pos: Vec2) -> (i32, i32) {
    (
        (pos.x / TILE_SIZE).floor() as i32,
        (pos.y / TILE_SIZE).floor() as i32,
    )
}

/// Ease `current` toward `target` by `rate` of the shortest angular
/// difference. Angles in radians; never snaps.
pub fn ease_angle(current: f32, target: f32, rate: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let diff = (target - current + PI).rem_euclid(TAU) - PI;
    current + diff * rate
}
