//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the world aggregate, processes queued player
//! commands at tick boundaries, runs all systems in a fixed order, and
//! produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing: the same seed and input stream reproduce the
//! same run.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bastion_core::commands::{InputState, PlayerCommand};
use bastion_core::enums::{GameOverReason, GamePhase};
use bastion_core::events::AudioEvent;
use bastion_core::state::GameStateSnapshot;
use bastion_core::types::SimTime;

use crate::systems;
use crate::world::SimulationState;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    state: SimulationState,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    audio_events: Vec<AudioEvent>,
    fire_was_down: bool,
}

impl SimulationEngine {
    /// Create a new engine. The world is generated immediately so the
    /// menu can show it, but nothing moves until `NewGame` arrives.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let state = SimulationState::new_game(&mut rng);
        Self {
            state,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            command_queue: VecDeque::new(),
            audio_events: Vec::new(),
            fire_was_down: false,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. `input` is the current state of the input device; the
    /// engine derives the fire edge itself.
    pub fn tick(&mut self, input: &InputState) -> GameStateSnapshot {
        self.process_commands();

        let fire_edge = input.fire && !self.fire_was_down;
        self.fire_was_down = input.fire;

        if self.phase == GamePhase::Active {
            self.run_systems(input, fire_edge);
            self.time.advance();
            self.check_termination();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build(&self.state, self.time, self.phase, audio_events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only access to the world for tests and tooling.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Mutable world access for test setup.
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::NewGame => {
                self.state = SimulationState::new_game(&mut self.rng);
                self.time = SimTime::default();
                self.phase = GamePhase::Active;
                self.audio_events.clear();
                self.fire_was_down = false;
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Run all systems in order. The order is load-bearing: projectiles
    /// move after vehicles, cleanup sees this frame's casualties, and
    /// the wave controller sees the purged set.
    fn run_systems(&mut self, input: &InputState, fire_edge: bool) {
        let state = &mut self.state;
        let audio = &mut self.audio_events;
        // 1. Player: movement, fuel, firing, respawn countdown.
        systems::player::run(state, input, fire_edge, audio);
        // 2. Opponent steering, movement, fire rolls.
        systems::opponent::run(state, &mut self.rng, audio);
        // 3. Projectile flight and interactions.
        systems::projectile::run(state, &mut self.rng, audio);
        // 4. Power-up lifetimes and pickups.
        systems::powerup::run(state, audio);
        // 5. Fuel-can pickups.
        systems::fuel::run(state, audio);
        // 6. Effect decay.
        systems::effects::run(state);
        // 7. Base shield countdown.
        systems::base::run(state);
        // 8. Cleanup: purge the dead and expired, apply scoring.
        systems::cleanup::run(state);
        // 9. Wave/level evaluation and spawning.
        systems::wave::run(state, &mut self.rng, audio);
    }

    /// Evaluate terminal conditions once, at the end of the step.
    fn check_termination(&mut self) {
        let reason = if self.state.base.destroyed {
            Some(GameOverReason::BaseDestroyed)
        } else if self.state.player.lives == 0 {
            Some(GameOverReason::LivesExhausted)
        } else if self.state.player.fuel <= 0.0 {
            Some(GameOverReason::FuelExhausted)
        } else {
            None
        };
        if let Some(reason) = reason {
            self.phase = GamePhase::GameOver(reason);
        }
    }
}
