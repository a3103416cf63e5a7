//! Base shield countdown.

use crate::world::SimulationState;

pub fn run(state: &mut SimulationState) {
    if state.base.shielded {
        state.base.timer = state.base.timer.saturating_sub(1);
        if state.base.timer == 0 {
            state.base.shielded = false;
        }
    }
}
