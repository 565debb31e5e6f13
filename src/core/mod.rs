//! Core types: signals, difficulty profiles, state, RNG, configuration.
//!
//! Everything else in the crate is built from these values; none of them
//! know about timers or the presentation layer.

pub mod signal;
pub mod difficulty;
pub mod rng;
pub mod config;
pub mod state;

pub use signal::Signal;
pub use difficulty::{resolve, Difficulty, DifficultyProfile};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, Timing};
pub use state::{GameState, Phase, Sequence};
