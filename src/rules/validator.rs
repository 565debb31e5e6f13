//! Input validation.
//!
//! Reversed order (hard difficulty) lives entirely in `expected_order`;
//! `judge` only ever compares against whatever that returns.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{DifficultyProfile, GameState, Phase, Sequence, Signal};

/// Result of one accepted submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Correct so far; more signals are expected.
    Continue,
    /// The whole sequence was reproduced.
    RoundComplete,
    /// Wrong signal. Carries the level the player reached.
    GameOver { level: usize },
}

impl RoundOutcome {
    /// Check if this outcome ends the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, RoundOutcome::GameOver { .. })
    }
}

/// New state plus outcome from an accepted submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub state: GameState,
    pub outcome: RoundOutcome,
}

/// The order in which the player must reproduce `sequence`.
#[must_use]
pub fn expected_order(sequence: &Sequence, profile: &DifficultyProfile) -> Sequence {
    if profile.reversed_expected {
        sequence.iter().rev().copied().collect()
    } else {
        sequence.clone()
    }
}

/// Judge the latest entry of `progress` against `expected`.
///
/// Earlier entries are assumed to have been judged already.
///
/// # Panics
///
/// Panics if `progress` is empty or longer than `expected`.
#[must_use]
pub fn judge(expected: &Sequence, progress: &Sequence) -> RoundOutcome {
    assert!(!progress.is_empty(), "Nothing submitted to judge");
    assert!(
        progress.len() <= expected.len(),
        "Submitted {} signals for a sequence of {}",
        progress.len(),
        expected.len()
    );

    let i = progress.len() - 1;
    if progress[i] != expected[i] {
        RoundOutcome::GameOver { level: expected.len() }
    } else if progress.len() == expected.len() {
        RoundOutcome::RoundComplete
    } else {
        RoundOutcome::Continue
    }
}

/// Apply a player submission to `state`.
///
/// Returns `None` (and leaves `state` untouched) unless the state is
/// waiting for input, i.e. while playback runs, between rounds, or when no
/// game is running.
///
/// On acceptance the submitted signal becomes the flashing signal, it is
/// appended to the progress, and the phase moves to `Preparing` on a
/// completed round or `GameOver` on a miss.
#[must_use]
pub fn submit(state: &GameState, signal: Signal) -> Option<Submission> {
    if !state.accepts_input() {
        debug!(phase = ?state.phase(), %signal, "Submission rejected");
        return None;
    }

    let mut next = state.clone();
    next.set_flashing(Some(signal));
    next.push_progress(signal);

    let expected = expected_order(next.sequence(), &next.profile());
    let outcome = judge(&expected, next.progress());
    trace!(%signal, position = next.progress().len(), ?outcome, "Submission judged");

    match outcome {
        RoundOutcome::Continue => {}
        RoundOutcome::RoundComplete => next.set_phase(Phase::Preparing),
        RoundOutcome::GameOver { .. } => next.set_phase(Phase::GameOver),
    }

    Some(Submission { state: next, outcome })
}
