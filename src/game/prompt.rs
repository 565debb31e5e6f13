//! Status line shown under the board.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Phase};

/// What the player should be told right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    Idle,
    Watch,
    Repeat,
    RepeatReversed,
    GameOver { level: usize },
    Restarting,
}

impl Prompt {
    /// Derive the prompt from the state.
    #[must_use]
    pub fn for_state(state: &GameState) -> Self {
        match state.phase() {
            Phase::Idle => Prompt::Idle,
            Phase::Preparing | Phase::Playback => Prompt::Watch,
            Phase::AwaitingInput if state.profile().reversed_expected => Prompt::RepeatReversed,
            Phase::AwaitingInput => Prompt::Repeat,
            Phase::GameOver => Prompt::GameOver { level: state.level() },
            Phase::Restarting => Prompt::Restarting,
        }
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prompt::Idle => f.write_str("Press start"),
            Prompt::Watch => f.write_str("Watch the sequence..."),
            Prompt::Repeat => f.write_str("Repeat the sequence"),
            Prompt::RepeatReversed => f.write_str("Repeat in REVERSE order"),
            Prompt::GameOver { level } => write!(f, "Game Over! You reached level {level}"),
            Prompt::Restarting => f.write_str("Starting a new game with new difficulty"),
        }
    }
}
