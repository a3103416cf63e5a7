//! Removal passes: spent projectiles, destroyed opponents (scored on
//! the way out), and collected or expired pickups.

use bastion_core::constants::KILL_SCORE;

use crate::world::SimulationState;

pub fn run(state: &mut SimulationState) {
    state.projectiles.retain(|b| b.alive);

    let before = state.opponents.len();
    state.opponents.retain(|o| o.alive);
    let destroyed = (before - state.opponents.len()) as u32;
    state.player.score += KILL_SCORE * destroyed;

    state.powerups.retain(|pu| pu.alive && pu.timer > 0);
    state.fuel_cans.retain(|can| can.alive);
}
