//! The BASTION simulation engine.
//!
//! Headless and deterministic: the engine owns the world aggregate and
//! a seeded RNG, advances everything exactly once per tick in a fixed
//! order, and emits snapshots for the presentation layer.

pub mod engine;
pub mod systems;
pub mod world;

pub use engine::{SimConfig, SimulationEngine};
pub use world::SimulationState;
