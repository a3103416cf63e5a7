//! Fuel-can pickups: proximity test, clamped refill.

use bastion_core::constants::*;
use bastion_core::entities::Effect;
use bastion_core::events::AudioEvent;

use crate::world::SimulationState;

pub fn run(state: &mut SimulationState, audio: &mut Vec<AudioEvent>) {
    if !state.player.alive {
        return;
    }
    for i in 0..state.fuel_cans.len() {
        let can = state.fuel_cans[i];
        if !can.alive || state.player.pos.distance(can.pos) >= PICKUP_RADIUS {
            continue;
        }
        state.fuel_cans[i].alive = false;
        state.player.fuel = (state.player.fuel + MAX_FUEL / FUEL_RESTORE_DIV).min(MAX_FUEL);
        state
            .effects
            .push(Effect::flash(can.pos, FLASH_PICKUP_FRAMES));
        audio.push(AudioEvent::FuelCollected);
    }
}
