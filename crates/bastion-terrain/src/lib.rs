//! Terrain for BASTION: the per-level tile grid and the axis-aligned
//! collision queries shared by vehicle movement and projectiles.

pub mod collision;
pub mod grid;

pub use grid::TileGrid;
