//! Wave and level evaluation, run after cleanup.
//!
//! An empty opponent set advances the wave counter; crossing the
//! waves-per-level threshold regenerates the whole level first. Either
//! way a fresh wave spawns immediately.

use rand_chacha::ChaCha8Rng;

use bastion_campaign::WaveOutcome;
use bastion_core::events::AudioEvent;

use crate::world::{self, SimulationState};

pub fn run(state: &mut SimulationState, rng: &mut ChaCha8Rng, audio: &mut Vec<AudioEvent>) {
    if !state.opponents.is_empty() {
        return;
    }

    if state.progression.advance_wave() == WaveOutcome::LevelUp {
        world::begin_level(state, rng);
        audio.push(AudioEvent::LevelAdvanced {
            level: state.progression.level,
        });
    }

    let count = state.progression.spawn_count();
    world::spawn_wave(state, rng, count);
}
