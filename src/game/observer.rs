//! Notifications from the session to the presentation layer.
//!
//! Hosts that prefer pulling can ignore the observer entirely and read
//! `GeniusSession::state()` after every command or clock advance.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, GameState, Signal};

/// Receiver for session events. Every method defaults to a no-op.
pub trait GameObserver {
    /// Any field of the state changed.
    fn on_state_changed(&mut self, _state: &GameState) {}

    /// A signal lit up, during playback or from a player press.
    fn on_flash_on(&mut self, _signal: Signal) {}

    /// The lit signal went dark.
    fn on_flash_off(&mut self) {}

    /// Playback of a sequence of `level` signals began.
    fn on_playback_started(&mut self, _level: usize) {}

    /// Playback finished; the player may respond.
    fn on_playback_complete(&mut self) {}

    /// The player missed. The host should show the level and offer a new game.
    fn on_game_over(&mut self, _level: usize) {}

    /// Difficulty changed mid-game; a new game starts automatically shortly.
    fn on_difficulty_changed_while_running(&mut self, _difficulty: Difficulty) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// A recorded session event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    FlashOn(Signal),
    FlashOff,
    PlaybackStarted { level: usize },
    PlaybackComplete,
    GameOver { level: usize },
    DifficultyChangedWhileRunning(Difficulty),
}

/// Observer that records events in order.
///
/// State changes are only counted; read the session state for details.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
    state_changes: usize,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of `on_state_changed` calls seen.
    #[must_use]
    pub fn state_changes(&self) -> usize {
        self.state_changes
    }

    /// Take all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Signals flashed so far, in order.
    #[must_use]
    pub fn flashed(&self) -> Vec<Signal> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GameEvent::FlashOn(signal) => Some(*signal),
                _ => None,
            })
            .collect()
    }
}

impl GameObserver for EventLog {
    fn on_state_changed(&mut self, _state: &GameState) {
        self.state_changes += 1;
    }

    fn on_flash_on(&mut self, signal: Signal) {
        self.events.push(GameEvent::FlashOn(signal));
    }

    fn on_flash_off(&mut self) {
        self.events.push(GameEvent::FlashOff);
    }

    fn on_playback_started(&mut self, level: usize) {
        self.events.push(GameEvent::PlaybackStarted { level });
    }

    fn on_playback_complete(&mut self) {
        self.events.push(GameEvent::PlaybackComplete);
    }

    fn on_game_over(&mut self, level: usize) {
        self.events.push(GameEvent::GameOver { level });
    }

    fn on_difficulty_changed_while_running(&mut self, difficulty: Difficulty) {
        self.events.push(GameEvent::DifficultyChangedWhileRunning(difficulty));
    }
}
