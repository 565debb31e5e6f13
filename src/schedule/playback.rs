//! Playback timeline.
//!
//! For signal `i` of the sequence:
//! - flash on at `i * interval`
//! - flash off at `i * interval + flash`
//!
//! Completion comes `completion_tail` after the last flash-off. With the
//! default timing that is 500 ms after the last flash-on, at every
//! difficulty.

use serde::{Deserialize, Serialize};

use crate::core::{DifficultyProfile, Sequence, Signal, Timing};

/// One event of a playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStep {
    /// Light a signal.
    FlashOn(Signal),
    /// Clear the lit signal.
    FlashOff,
    /// Playback finished; input opens.
    Complete,
}

/// Offsets (ms from playback start) of every playback event, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackPlan {
    steps: Vec<(u64, PlaybackStep)>,
}

impl PlaybackPlan {
    /// Lay out the playback of `sequence`.
    ///
    /// An empty sequence produces only `Complete` at offset 0.
    #[must_use]
    pub fn new(sequence: &Sequence, profile: &DifficultyProfile, timing: &Timing) -> Self {
        let mut steps = Vec::with_capacity(sequence.len() * 2 + 1);
        let mut last_off = None;

        for (i, signal) in sequence.iter().enumerate() {
            let on = i as u64 * profile.interval_ms;
            let off = on + timing.flash_ms;
            steps.push((on, PlaybackStep::FlashOn(*signal)));
            steps.push((off, PlaybackStep::FlashOff));
            last_off = Some(off);
        }

        let complete = last_off.map_or(0, |off| off + timing.completion_tail_ms);
        steps.push((complete, PlaybackStep::Complete));

        // Stable sort keeps on-before-off when offsets coincide.
        steps.sort_by_key(|(offset, _)| *offset);
        Self { steps }
    }

    /// All steps with their offsets.
    #[must_use]
    pub fn steps(&self) -> &[(u64, PlaybackStep)] {
        &self.steps
    }

    /// Offset of the completion step.
    #[must_use]
    pub fn duration(&self) -> u64 {
        self.steps
            .iter()
            .find(|(_, step)| *step == PlaybackStep::Complete)
            .map_or(0, |(offset, _)| *offset)
    }

    /// Number of flash-on events.
    #[must_use]
    pub fn flash_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|(_, step)| matches!(step, PlaybackStep::FlashOn(_)))
            .count()
    }
}
