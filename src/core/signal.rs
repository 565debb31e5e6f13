//! The signal catalog.
//!
//! Nine distinct signals in a fixed order. Difficulty profiles expose only
//! a prefix of the catalog (the first 6 or all 9); the catalog itself is
//! static and never mutated.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GeniusError;

/// One colored game token the player can select.
///
/// Discriminants follow catalog order, so `Signal::ALL[s.index()] == s`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Green = 0,
    Red = 1,
    Blue = 2,
    Yellow = 3,
    Purple = 4,
    Orange = 5,
    Pink = 6,
    Teal = 7,
    Lime = 8,
}

impl Signal {
    /// Size of the full catalog.
    pub const COUNT: usize = 9;

    /// The full catalog in order.
    pub const ALL: [Signal; Signal::COUNT] = [
        Signal::Green,
        Signal::Red,
        Signal::Blue,
        Signal::Yellow,
        Signal::Purple,
        Signal::Orange,
        Signal::Pink,
        Signal::Teal,
        Signal::Lime,
    ];

    /// Position of this signal in the catalog (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Signal at a catalog position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Signal::COUNT`; an out-of-catalog index is a
    /// caller bug.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(
            index < Self::COUNT,
            "Signal index {} out of catalog (0..{})",
            index,
            Self::COUNT
        );
        Self::ALL[index]
    }

    /// The first `alphabet_size` signals of the catalog.
    ///
    /// # Panics
    ///
    /// Panics if `alphabet_size` is 0 or larger than the catalog.
    #[must_use]
    pub fn selectable(alphabet_size: usize) -> &'static [Signal] {
        assert!(
            (1..=Self::COUNT).contains(&alphabet_size),
            "Alphabet size must be 1-{}, got {}",
            Self::COUNT,
            alphabet_size
        );
        &Self::ALL[..alphabet_size]
    }

    /// Lowercase color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Signal::Green => "green",
            Signal::Red => "red",
            Signal::Blue => "blue",
            Signal::Yellow => "yellow",
            Signal::Purple => "purple",
            Signal::Orange => "orange",
            Signal::Pink => "pink",
            Signal::Teal => "teal",
            Signal::Lime => "lime",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Signal {
    type Err = GeniusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|signal| signal.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GeniusError::UnknownSignal(s.to_string()))
    }
}
