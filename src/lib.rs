//! # rust-genius
//!
//! The sequence-and-turn engine of a Simon/Genius style memory game.
//!
//! The device shows a growing sequence of colored signals and the player
//! reproduces it. This crate owns everything except drawing: sequence
//! generation, timed playback, input validation and round progression.
//!
//! ## Design Principles
//!
//! 1. **One state value**: `GameState` is the single record of the game.
//!    Validation is a pure transition returning a new state.
//!
//! 2. **Cancelable time**: playback and pauses are scheduled tasks grouped
//!    under tokens. Restarting cancels whole groups, so stale flashes never
//!    reach a new game.
//!
//! 3. **Host-driven clock**: nothing runs in the background. The
//!    presentation layer advances the session clock and reads the state.
//!
//! ## Modules
//!
//! - `core`: Signals, difficulty profiles, state, RNG, configuration
//! - `sequence`: Random sequence extension
//! - `rules`: Expected order and submission judging
//! - `schedule`: Cancelable scheduler and playback timeline
//! - `game`: The session and its observer interface

pub mod core;
pub mod error;
pub mod sequence;
pub mod rules;
pub mod schedule;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    resolve, Difficulty, DifficultyProfile, GameConfig, GameRng, GameRngState, GameState, Phase,
    Sequence, Signal, Timing,
};

pub use crate::error::{GeniusError, Result};

pub use crate::rules::{expected_order, RoundOutcome, Submission};

pub use crate::schedule::{PlaybackPlan, PlaybackStep, Scheduler, TimerToken};

pub use crate::game::{EventLog, GameEvent, GameObserver, GeniusSession, NullObserver, Prompt};
