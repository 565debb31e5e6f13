//! Appending random signals to a sequence.

use tracing::trace;

use crate::core::{DifficultyProfile, GameRng, Sequence, Signal};

/// Draw one signal uniformly from the profile's alphabet.
pub fn draw_signal(profile: &DifficultyProfile, rng: &mut GameRng) -> Signal {
    let alphabet = profile.alphabet();
    alphabet[rng.pick_index(alphabet.len())]
}

/// Return `sequence` with one freshly drawn signal appended.
///
/// The input is left untouched; `im` shares its storage with the result.
#[must_use]
pub fn extend(sequence: &Sequence, profile: &DifficultyProfile, rng: &mut GameRng) -> Sequence {
    let signal = draw_signal(profile, rng);
    let mut extended = sequence.clone();
    extended.push_back(signal);
    trace!(level = extended.len(), %signal, "Sequence extended");
    extended
}
