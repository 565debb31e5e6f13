//! Cooperative timing: a cancelable task queue on a host-driven clock, and
//! the flash schedule for sequence playback.
//!
//! ## Model
//!
//! There is one logical thread. The host advances the clock; every task
//! due by then runs in `(due, insertion)` order. Tasks are grouped under a
//! `TimerToken`, and cancelling the token discards the whole group, so a
//! superseded playback can never fire a stale flash or completion.

pub mod timer;
pub mod playback;

pub use timer::{Scheduler, TimerToken};
pub use playback::{PlaybackPlan, PlaybackStep};
