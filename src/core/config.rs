//! Session configuration.
//!
//! Presentation hosts build a `GameConfig` in code or load one from JSON:
//! - `Timing`: flash length and the pauses between game stages
//! - `GameConfig`: timing plus starting difficulty and RNG seed
//!
//! Difficulty profiles themselves are fixed and not configurable.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use crate::error::{GeniusError, Result};

/// Millisecond delays used by the session scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// How long a signal stays lit, for playback and player presses.
    pub flash_ms: u64,

    /// Gap between the final flash-off and playback completion.
    pub completion_tail_ms: u64,

    /// Pause after a completed round before the sequence grows.
    pub round_pause_ms: u64,

    /// Pause between growing the sequence and starting playback.
    pub playback_lead_ms: u64,

    /// Pause before the automatic restart after a mid-game difficulty change.
    pub difficulty_restart_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            flash_ms: 300,
            completion_tail_ms: 200,
            round_pause_ms: 1000,
            playback_lead_ms: 1000,
            difficulty_restart_ms: 1000,
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Difficulty selected when the session is created.
    pub initial_difficulty: Difficulty,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Stage delays.
    pub timing: Timing,
}

impl GameConfig {
    /// Create a config with default timing and easy difficulty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.initial_difficulty = difficulty;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the timing table.
    #[must_use]
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that playback flashes cannot overlap at any difficulty.
    pub fn validate(&self) -> Result<()> {
        let flash = self.timing.flash_ms;
        if flash == 0 {
            return Err(GeniusError::InvalidConfig(
                "flash_ms must be positive".to_string(),
            ));
        }

        let fastest = Difficulty::ALL
            .iter()
            .map(|d| d.profile().interval_ms)
            .min()
            .unwrap_or(u64::MAX);
        if flash >= fastest {
            return Err(GeniusError::InvalidConfig(format!(
                "flash_ms ({flash}) must be shorter than the fastest playback interval ({fastest})"
            )));
        }

        Ok(())
    }
}
