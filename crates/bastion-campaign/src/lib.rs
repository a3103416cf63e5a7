//! Wave and level progression for BASTION.
//!
//! Tracks the wave/level counters and the opponent speed schedule.
//! The sim asks this crate what happens when a wave is cleared and how
//! fast and numerous the next batch of opponents should be; map
//! regeneration and spawning themselves stay in the sim.

use serde::{Deserialize, Serialize};

use bastion_core::constants::*;

/// Wave controller state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Progression {
    pub wave: u32,
    pub level: u32,
    pub waves_per_level: u32,
    /// Base opponent speed; rises with every level, never falls.
    pub opponent_base_speed: f32,
    /// Highest spawn speed issued so far. The wave bonus resets on a
    /// level rollover slightly faster than the level bonus grows, so
    /// spawn speeds are clamped to this floor to stay non-decreasing.
    pub speed_floor: f32,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            wave: 1,
            level: 1,
            waves_per_level: WAVES_PER_LEVEL,
            opponent_base_speed: OPPONENT_BASE_SPEED,
            speed_floor: OPPONENT_BASE_SPEED,
        }
    }
}

/// What a cleared wave leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveOutcome {
    /// Next wave on the same map.
    NextWave,
    /// Wave threshold exceeded: new level, new map.
    LevelUp,
}

impl Progression {
    /// Advance past a cleared wave. On passing the waves-per-level
    /// threshold the wave counter resets, the level increments, and the
    /// base speed rises by its fixed increment.
    pub fn advance_wave(&mut self) -> WaveOutcome {
        self.speed_floor = self.speed_floor.max(self.opponent_speed());
        self.wave += 1;
        if self.wave > self.waves_per_level {
            self.wave = 1;
            self.level += 1;
            self.opponent_base_speed += LEVEL_SPEED_INCREMENT;
            WaveOutcome::LevelUp
        } else {
            WaveOutcome::NextWave
        }
    }

    /// Opponents to spawn for the current wave, capped.
    pub fn spawn_count(&self) -> u32 {
        (2 + self.level + self.wave).min(MAX_WAVE_SPAWN)
    }

    /// Speed for an opponent spawned now: base speed plus level and
    /// wave bonuses, never below the speed already reached.
    pub fn opponent_speed(&self) -> f32 {
        let scheduled = self.opponent_base_speed
            + SPEED_PER_LEVEL * (self.level - 1) as f32
            + SPEED_PER_WAVE_PAIR * ((self.wave - 1) / 2) as f32;
        scheduled.max(self.speed_floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_advances_within_level() {
        let mut p = Progression::default();
        assert_eq!(p.advance_wave(), WaveOutcome::NextWave);
        assert_eq!(p.wave, 2);
        assert_eq!(p.level, 1);
    }

    #[test]
    fn test_level_rollover() {
        let mut p = Progression::default();
        let base = p.opponent_base_speed;
        for _ in 0..WAVES_PER_LEVEL - 1 {
            assert_eq!(p.advance_wave(), WaveOutcome::NextWave);
        }
        assert_eq!(p.advance_wave(), WaveOutcome::LevelUp);
        assert_eq!(p.wave, 1);
        assert_eq!(p.level, 2);
        assert!((p.opponent_base_speed - (base + LEVEL_SPEED_INCREMENT)).abs() < 1e-6);
    }

    #[test]
    fn test_spawn_count_grows_and_caps() {
        let mut p = Progression::default();
        assert_eq!(p.spawn_count(), 4); // 2 + level 1 + wave 1
        p.level = 3;
        p.wave = 2;
        assert_eq!(p.spawn_count(), 7);
        p.level = 10;
        p.wave = 4;
        assert_eq!(p.spawn_count(), MAX_WAVE_SPAWN);
    }

    #[test]
    fn test_opponent_speed_never_decreases() {
        let mut p = Progression::default();
        let mut last = 0.0f32;
        for _ in 0..40 {
            let speed = p.opponent_speed();
            assert!(
                speed >= last,
                "speed regressed: {speed} after {last} at level {} wave {}",
                p.level,
                p.wave
            );
            last = speed;
            let _ = p.advance_wave();
        }
    }

    #[test]
    fn test_speed_floor_covers_level_rollover() {
        let mut p = Progression::default();
        // Reach the last wave of level 1, where the wave bonus peaks.
        p.wave = p.waves_per_level;
        let peak = p.opponent_speed();
        assert_eq!(p.advance_wave(), WaveOutcome::LevelUp);
        assert!(
            p.opponent_speed() >= peak,
            "rollover dipped below the peak: {} < {peak}",
            p.opponent_speed()
        );
    }

    #[test]
    fn test_wave_pair_bonus() {
        let mut p = Progression::default();
        p.wave = 1;
        let w1 = p.opponent_speed();
        p.wave = 2;
        let w2 = p.opponent_speed();
        p.wave = 3;
        let w3 = p.opponent_speed();
        assert!((w1 - w2).abs() < 1e-6, "waves 1 and 2 share a speed tier");
        assert!(w3 > w2, "wave 3 starts the next speed tier");
    }

    #[test]
    fn test_progression_serde_roundtrip() {
        let p = Progression {
            wave: 3,
            level: 5,
            ..Default::default()
        };
        let json = serde_json::to_string(&p).unwrap();
        let back: Progression = serde_json::from_str(&json).unwrap();
        assert_eq!(back.wave, 3);
        assert_eq!(back.level, 5);
    }
}
