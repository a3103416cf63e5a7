//! Transient effect decay.

use crate::world::SimulationState;

pub fn run(state: &mut SimulationState) {
    for effect in &mut state.effects {
        effect.timer -= 1;
    }
    state.effects.retain(|effect| effect.timer > 0);
}
