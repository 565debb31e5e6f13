//! Difficulty selectors and the profiles they resolve to.
//!
//! | selector | interval | alphabet | reversed |
//! |----------|----------|----------|----------|
//! | easy     | 800 ms   | 6        | no       |
//! | medium   | 600 ms   | 9        | no       |
//! | hard     | 400 ms   | 9        | yes      |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::signal::Signal;
use crate::error::GeniusError;

/// One of the three canonical difficulty selectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All selectors, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Resolve this selector to its parameter set.
    #[must_use]
    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                interval_ms: 800,
                alphabet_size: 6,
                reversed_expected: false,
            },
            Difficulty::Medium => DifficultyProfile {
                interval_ms: 600,
                alphabet_size: 9,
                reversed_expected: false,
            },
            Difficulty::Hard => DifficultyProfile {
                interval_ms: 400,
                alphabet_size: 9,
                reversed_expected: true,
            },
        }
    }

    /// Look up a selector by name, failing fast on anything else.
    ///
    /// Use `str::parse` when the name comes from user input.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not `easy`, `medium` or `hard`.
    #[must_use]
    pub fn named(name: &str) -> Self {
        match name.parse() {
            Ok(difficulty) => difficulty,
            Err(_) => panic!("Unknown difficulty selector: {name:?}"),
        }
    }

    /// Lowercase selector name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GeniusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GeniusError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Parameter bundle consumed by generation, playback and validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Time between consecutive flash-on events during playback.
    pub interval_ms: u64,

    /// How many catalog entries are generatable and selectable.
    pub alphabet_size: usize,

    /// Whether the player must reproduce the sequence back to front.
    pub reversed_expected: bool,
}

impl DifficultyProfile {
    /// Signals available under this profile.
    #[must_use]
    pub fn alphabet(&self) -> &'static [Signal] {
        Signal::selectable(self.alphabet_size)
    }

    /// Whether `signal` is inside this profile's alphabet.
    #[must_use]
    pub fn allows(&self, signal: Signal) -> bool {
        signal.index() < self.alphabet_size
    }
}

/// Resolve a selector to its profile.
#[must_use]
pub const fn resolve(difficulty: Difficulty) -> DifficultyProfile {
    difficulty.profile()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_table() {
        assert_eq!(
            resolve(Difficulty::Easy),
            DifficultyProfile { interval_ms: 800, alphabet_size: 6, reversed_expected: false }
        );
        assert_eq!(
            resolve(Difficulty::Medium),
            DifficultyProfile { interval_ms: 600, alphabet_size: 9, reversed_expected: false }
        );
        assert_eq!(
            resolve(Difficulty::Hard),
            DifficultyProfile { interval_ms: 400, alphabet_size: 9, reversed_expected: true }
        );
    }

    #[test]
    fn test_named() {
        assert_eq!(Difficulty::named("hard"), Difficulty::Hard);
        assert_eq!(Difficulty::named("Medium"), Difficulty::Medium);
    }

    #[test]
    #[should_panic(expected = "Unknown difficulty selector")]
    fn test_named_unknown_panics() {
        let _ = Difficulty::named("nightmare");
    }

    #[test]
    fn test_parse_unknown_is_error() {
        let err = "nightmare".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, GeniusError::UnknownDifficulty(_)));
    }

    #[test]
    fn test_alphabet() {
        let easy = Difficulty::Easy.profile();
        assert_eq!(easy.alphabet().len(), 6);
        assert!(easy.allows(Signal::Orange));
        assert!(!easy.allows(Signal::Pink));

        let hard = Difficulty::Hard.profile();
        assert!(hard.allows(Signal::Lime));
    }

    #[test]
    fn test_default_is_easy() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
