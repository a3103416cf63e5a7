//! Opponent AI for BASTION.
//!
//! Implements the random-walk steering controller and the probabilistic
//! fire decision as pure functions on plain data. The sim applies the
//! results; nothing here touches world state.

pub mod controller;

pub use controller::{
    blocked_redirect, random_direction, spawn_move_timer, spawn_reload, tick_fire, tick_steering,
    FireDecision, SteerDecision,
};
