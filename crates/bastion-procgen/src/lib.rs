//! Procedural generation for BASTION levels: terrain layout and
//! fuel-can placement. Deterministic for a given RNG state.

pub mod fuel;
pub mod map;

pub use fuel::generate_fuel_cans;
pub use map::generate;
