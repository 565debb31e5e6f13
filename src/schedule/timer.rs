//! Cancelable task queue on a virtual millisecond clock.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Handle for a group of scheduled tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken(pub u32);

impl TimerToken {
    /// Create a token from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TimerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// A queued task. Ordered by due time, then insertion order; the payload
/// takes no part in ordering.
#[derive(Debug)]
struct Entry<T> {
    due: u64,
    order: u64,
    token: TimerToken,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.order == other.order
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.order).cmp(&(other.due, other.order))
    }
}

/// Single-threaded scheduler driven by an external clock.
///
/// Nothing runs on its own: the owner calls `pop_due` to take the next
/// task whose time has come, runs it, and repeats. Tasks scheduled while
/// running a task are seen by the same loop if they fall due in time.
///
/// ```
/// use rust_genius::schedule::Scheduler;
///
/// let mut scheduler = Scheduler::new();
/// let token = scheduler.issue_token();
/// scheduler.schedule(token, 100, "flash");
///
/// assert!(scheduler.pop_due(50).is_none());
/// assert_eq!(scheduler.pop_due(100).map(|(_, task)| task), Some("flash"));
/// assert_eq!(scheduler.now(), 100);
/// ```
#[derive(Debug)]
pub struct Scheduler<T> {
    /// Current clock value in milliseconds.
    now: u64,

    /// Pending tasks, earliest first.
    queue: BinaryHeap<Reverse<Entry<T>>>,

    /// Tokens that have been issued and not cancelled.
    live: FxHashSet<TimerToken>,

    next_token: u32,
    next_order: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler at time 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: 0,
            queue: BinaryHeap::new(),
            live: FxHashSet::default(),
            next_token: 0,
            next_order: 0,
        }
    }

    /// Current clock value in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Issue a fresh live token.
    pub fn issue_token(&mut self) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.live.insert(token);
        token
    }

    /// Check whether tasks under `token` can still run.
    #[must_use]
    pub fn is_live(&self, token: TimerToken) -> bool {
        self.live.contains(&token)
    }

    /// Invalidate every pending task under `token`.
    ///
    /// Returns false if the token was already cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let was_live = self.live.remove(&token);
        if was_live {
            trace!(%token, "Timer group cancelled");
        }
        was_live
    }

    /// Queue `task` to run `delay_ms` after the current time.
    ///
    /// Scheduling under a cancelled token is allowed; the task is simply
    /// never returned.
    pub fn schedule(&mut self, token: TimerToken, delay_ms: u64, task: T) {
        let entry = Entry {
            due: self.now.saturating_add(delay_ms),
            order: self.next_order,
            token,
            task,
        };
        self.next_order += 1;
        self.queue.push(Reverse(entry));
    }

    /// Take the next live task due at or before `until`.
    ///
    /// Advances the clock to the task's due time. Cancelled tasks met on
    /// the way are dropped.
    pub fn pop_due(&mut self, until: u64) -> Option<(TimerToken, T)> {
        loop {
            let due = self.queue.peek().map(|Reverse(entry)| entry.due)?;
            if due > until {
                return None;
            }

            let Reverse(entry) = self.queue.pop()?;
            if !self.live.contains(&entry.token) {
                continue;
            }

            self.now = self.now.max(entry.due);
            return Some((entry.token, entry.task));
        }
    }

    /// Move the clock forward to `until` (never backwards).
    pub fn advance_to(&mut self, until: u64) {
        self.now = self.now.max(until);
    }

    /// Due time of the earliest live task.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.live_entries().map(|entry| entry.due).min()
    }

    /// Number of live pending tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.live_entries().count()
    }

    /// Number of live pending tasks under `token`.
    #[must_use]
    pub fn pending_for(&self, token: TimerToken) -> usize {
        self.live_entries().filter(|entry| entry.token == token).count()
    }

    fn live_entries(&self) -> impl Iterator<Item = &Entry<T>> {
        self.queue
            .iter()
            .map(|Reverse(entry)| entry)
            .filter(|entry| self.live.contains(&entry.token))
    }
}
