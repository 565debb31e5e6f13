//! Game state: the authoritative record the presentation layer renders.
//!
//! ## GameState
//!
//! - Sequence generated so far (its length is the level)
//! - Signals the player has submitted this round
//! - Phase of the round state machine
//! - Active difficulty
//! - Currently flashing signal, if any
//!
//! `running` and `playback in progress` are derived from the phase, so the
//! two flags can never disagree with it.
//!
//! Uses `im` persistent vectors so transition functions can hand back a new
//! state without copying the sequence.
//!
//! Deserialized states are checked against the same invariants the engine
//! keeps, so a restored state can be fed to the validator safely.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::error::GeniusError;

use super::difficulty::{Difficulty, DifficultyProfile};
use super::signal::Signal;

/// An ordered run of signals.
pub type Sequence = Vector<Signal>;

/// Where the round state machine currently is.
///
/// ```text
/// Idle ──start──▶ Preparing ──▶ Playback ──▶ AwaitingInput ──ok──▶ Preparing
///                                                  │
///                                                  └──miss──▶ GameOver
/// ```
///
/// `Restarting` covers the pause between a mid-game difficulty change and
/// the automatic new game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been started yet.
    #[default]
    Idle,
    /// Between rounds: the sequence is about to grow or about to play.
    Preparing,
    /// The sequence is being shown; input is closed.
    Playback,
    /// Waiting (indefinitely) for the player's next signal.
    AwaitingInput,
    /// The last submission was wrong.
    GameOver,
    /// A difficulty change is about to restart the game.
    Restarting,
}

impl Phase {
    /// Whether a game is in progress.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Phase::Preparing | Phase::Playback | Phase::AwaitingInput)
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    sequence: Sequence,
    progress: Sequence,
    phase: Phase,
    difficulty: Difficulty,
    flashing: Option<Signal>,
}

impl GameState {
    /// Create an idle state for the given difficulty.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            sequence: Vector::new(),
            progress: Vector::new(),
            phase: Phase::Idle,
            difficulty,
            flashing: None,
        }
    }

    /// Create a state that is waiting for the player to reproduce `sequence`.
    ///
    /// Useful for replays and for driving the validator directly.
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty or uses signals outside the
    /// difficulty's alphabet.
    #[must_use]
    pub fn awaiting_input(difficulty: Difficulty, sequence: impl IntoIterator<Item = Signal>) -> Self {
        let sequence: Sequence = sequence.into_iter().collect();
        let profile = difficulty.profile();
        assert!(!sequence.is_empty(), "Sequence must not be empty");
        assert!(
            sequence.iter().all(|s| profile.allows(*s)),
            "Sequence uses signals outside the {} alphabet",
            difficulty
        );

        Self {
            sequence,
            progress: Vector::new(),
            phase: Phase::AwaitingInput,
            difficulty,
            flashing: None,
        }
    }

    // === Queries ===

    /// Current level (length of the sequence).
    #[must_use]
    pub fn level(&self) -> usize {
        self.sequence.len()
    }

    /// The sequence generated so far.
    #[must_use]
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Signals the player has submitted this round.
    #[must_use]
    pub fn progress(&self) -> &Sequence {
        &self.progress
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Profile of the active difficulty.
    #[must_use]
    pub fn profile(&self) -> DifficultyProfile {
        self.difficulty.profile()
    }

    /// Signal currently lit, if any.
    #[must_use]
    pub fn flashing(&self) -> Option<Signal> {
        self.flashing
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    #[must_use]
    pub fn is_playback_in_progress(&self) -> bool {
        self.phase == Phase::Playback
    }

    /// Whether a player submission would be considered at all.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::AwaitingInput
    }

    // === Transitions (crate-internal) ===

    /// Clear sequence, progress and flash; keep difficulty.
    pub(crate) fn reset(&mut self) {
        self.sequence = Vector::new();
        self.progress = Vector::new();
        self.flashing = None;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn set_sequence(&mut self, sequence: Sequence) {
        self.sequence = sequence;
    }

    pub(crate) fn push_progress(&mut self, signal: Signal) {
        self.progress.push_back(signal);
    }

    pub(crate) fn clear_progress(&mut self) {
        self.progress = Vector::new();
    }

    pub(crate) fn set_flashing(&mut self, signal: Option<Signal>) {
        self.flashing = signal;
    }

    pub(crate) fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}

/// Wire shape of [`GameState`] before validation.
#[derive(Deserialize)]
struct RawGameState {
    sequence: Sequence,
    progress: Sequence,
    phase: Phase,
    difficulty: Difficulty,
    flashing: Option<Signal>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GeniusError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let invalid = |msg: String| -> Result<Self, GeniusError> { Err(GeniusError::InvalidState(msg)) };
        let profile = raw.difficulty.profile();
        let (level, submitted) = (raw.sequence.len(), raw.progress.len());

        if let Some(signal) = raw.sequence.iter().find(|s| !profile.allows(**s)) {
            return invalid(format!(
                "sequence signal {} is outside the {} alphabet",
                signal, raw.difficulty
            ));
        }
        if submitted > level {
            return invalid(format!("{} signals submitted for a sequence of {}", submitted, level));
        }
        match raw.phase {
            Phase::Playback | Phase::AwaitingInput if level == 0 => {
                return invalid(format!("{:?} with an empty sequence", raw.phase));
            }
            Phase::AwaitingInput if submitted == level => {
                return invalid("awaiting input for a completed round".to_string());
            }
            _ => {}
        }

        // A running game has not missed yet: progress follows the expected order.
        if raw.phase.is_running() {
            let matches_expected = if profile.reversed_expected {
                raw.progress.iter().eq(raw.sequence.iter().rev().take(submitted))
            } else {
                raw.progress.iter().eq(raw.sequence.iter().take(submitted))
            };
            if !matches_expected {
                return invalid("progress deviates from the expected order".to_string());
            }
        }

        Ok(Self {
            sequence: raw.sequence,
            progress: raw.progress,
            phase: raw.phase,
            difficulty: raw.difficulty,
            flashing: raw.flashing,
        })
    }
}
