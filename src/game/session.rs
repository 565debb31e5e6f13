//! The session: state, clock, RNG and observer behind one command surface.
//!
//! ## Timer groups
//!
//! - game token: sequence extension, playback start, automatic restart
//! - playback token: the flashes and completion of one playback; a new
//!   token per playback
//! - flash token: the flash-off of a player press
//!
//! `start_game` and mid-game difficulty changes cancel the game and
//! playback groups, so nothing scheduled for an earlier game can touch the
//! new one.

use std::time::Duration;

use tracing::{debug, info, instrument, trace};

use crate::core::{Difficulty, GameConfig, GameRng, GameState, Phase, Signal};
use crate::error::Result;
use crate::rules::{self, RoundOutcome, Submission};
use crate::schedule::{PlaybackPlan, PlaybackStep, Scheduler, TimerToken};
use crate::sequence;

use super::observer::{GameObserver, NullObserver};
use super::prompt::Prompt;

/// Deferred work owned by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Task {
    /// Grow the sequence by one signal.
    Extend,
    /// Start playback of the current sequence.
    Play,
    /// One step of the running playback.
    Playback(PlaybackStep),
    /// End the flash of a player press.
    ClearPressFlash,
    /// Start a new game after a difficulty change.
    Restart,
}

/// A single-player game session.
///
/// Time only moves when the host calls [`GeniusSession::advance`]; every
/// task that falls due runs inside that call, in order.
///
/// ```
/// use std::time::Duration;
/// use rust_genius::{GameConfig, GeniusSession, Phase};
///
/// let mut session = GeniusSession::headless(GameConfig::new().with_seed(1)).unwrap();
/// session.start_game();
/// assert_eq!(session.level(), 1);
///
/// // Lead-in pause, then a single flash and the completion tail.
/// session.advance(Duration::from_millis(1000 + 500));
/// assert_eq!(session.state().phase(), Phase::AwaitingInput);
/// ```
#[derive(Debug)]
pub struct GeniusSession<O: GameObserver = NullObserver> {
    config: GameConfig,
    state: GameState,
    scheduler: Scheduler<Task>,
    rng: GameRng,
    observer: O,

    game_token: TimerToken,
    playback_token: Option<TimerToken>,
    flash_token: Option<TimerToken>,
}

impl GeniusSession<NullObserver> {
    /// Create a session nobody listens to; hosts poll `state()` instead.
    pub fn headless(config: GameConfig) -> Result<Self> {
        Self::new(config, NullObserver)
    }
}

impl<O: GameObserver> GeniusSession<O> {
    /// Create a session. The game is idle until `start_game`.
    pub fn new(config: GameConfig, observer: O) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut scheduler = Scheduler::new();
        let game_token = scheduler.issue_token();

        info!(difficulty = %config.initial_difficulty, seed = rng.seed(), "Session created");
        Ok(Self {
            state: GameState::new(config.initial_difficulty),
            config,
            scheduler,
            rng,
            observer,
            game_token,
            playback_token: None,
            flash_token: None,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn level(&self) -> usize {
        self.state.level()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    #[must_use]
    pub fn is_playback_in_progress(&self) -> bool {
        self.state.is_playback_in_progress()
    }

    #[must_use]
    pub fn flashing_signal(&self) -> Option<Signal> {
        self.state.flashing()
    }

    /// Signals the board should offer under the active difficulty.
    #[must_use]
    pub fn selectable_signals(&self) -> &'static [Signal] {
        self.state.profile().alphabet()
    }

    /// Status line for the current state.
    #[must_use]
    pub fn prompt(&self) -> Prompt {
        Prompt::for_state(&self.state)
    }

    /// Session clock in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now()
    }

    /// Clock value at which the next task falls due, if any.
    ///
    /// `None` while waiting for the player: there is no input timeout.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_deadline()
    }

    /// Number of tasks still waiting on the clock.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the session, returning its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    // === Commands ===

    /// Start a new game, abandoning any game in progress.
    ///
    /// Safe to call at any time. Pending timers of the previous game are
    /// cancelled, the first signal is drawn immediately and playback
    /// follows after the lead-in pause.
    #[instrument(skip(self), fields(difficulty = %self.state.difficulty()))]
    pub fn start_game(&mut self) {
        self.cancel_game_timers();
        if let Some(token) = self.flash_token.take() {
            self.scheduler.cancel(token);
        }

        self.state.reset();
        self.state.set_phase(Phase::Preparing);
        info!("Game started");

        self.extend_sequence();
    }

    /// Submit the player's next signal.
    ///
    /// Returns `None` when input is closed (no game, playback running, or
    /// between rounds); the state is left unchanged in that case.
    #[instrument(skip(self))]
    pub fn submit_signal(&mut self, signal: Signal) -> Option<RoundOutcome> {
        let Submission { state, outcome } = rules::submit(&self.state, signal)?;
        self.state = state;
        self.start_press_flash(signal);

        match outcome {
            RoundOutcome::Continue => {
                debug!(position = self.state.progress().len(), "Correct, continuing");
            }
            RoundOutcome::RoundComplete => {
                info!(level = self.state.level(), "Round complete");
                self.scheduler
                    .schedule(self.game_token, self.config.timing.round_pause_ms, Task::Extend);
            }
            RoundOutcome::GameOver { level } => {
                info!(level, "Game over");
                self.cancel_game_timers();
                self.observer.on_game_over(level);
            }
        }

        self.observer.on_state_changed(&self.state);
        Some(outcome)
    }

    /// Select a difficulty.
    ///
    /// While a game runs, a different selector abandons it: the observer is
    /// told, timers are cancelled and a new game starts after
    /// `difficulty_restart_ms`. Re-selecting the active difficulty does
    /// nothing.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty == self.state.difficulty() {
            trace!("Difficulty unchanged");
            return;
        }

        let was_running = self.state.is_running();
        self.state.set_difficulty(difficulty);
        info!(was_running, "Difficulty changed");

        if was_running {
            self.observer.on_difficulty_changed_while_running(difficulty);
            self.cancel_game_timers();
            self.clear_flash();
            self.state.set_phase(Phase::Restarting);
            self.scheduler.schedule(
                self.game_token,
                self.config.timing.difficulty_restart_ms,
                Task::Restart,
            );
        }

        self.observer.on_state_changed(&self.state);
    }

    /// Move the clock forward by `elapsed`, running every task that falls due.
    pub fn advance(&mut self, elapsed: Duration) {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.advance_ms(elapsed_ms);
    }

    /// Millisecond form of [`GeniusSession::advance`].
    pub fn advance_ms(&mut self, elapsed_ms: u64) {
        let target = self.scheduler.now().saturating_add(elapsed_ms);
        while let Some((token, task)) = self.scheduler.pop_due(target) {
            self.run(token, task);
        }
        self.scheduler.advance_to(target);
    }

    /// Run tasks until none are pending, returning the time that passed.
    ///
    /// Stops when the session waits on the player (or on nothing at all).
    pub fn run_pending(&mut self) -> u64 {
        let start = self.scheduler.now();
        while let Some(deadline) = self.scheduler.next_deadline() {
            let step = deadline.saturating_sub(self.scheduler.now());
            self.advance_ms(step);
        }
        self.scheduler.now() - start
    }

    // === Internals ===

    fn run(&mut self, token: TimerToken, task: Task) {
        trace!(%token, ?task, now = self.scheduler.now(), "Running task");
        match task {
            Task::Extend => self.extend_sequence(),
            Task::Play => self.play(),
            Task::Playback(step) => {
                debug_assert_eq!(Some(token), self.playback_token);
                self.playback_step(step);
            }
            Task::ClearPressFlash => {
                if let Some(token) = self.flash_token.take() {
                    self.scheduler.cancel(token);
                }
                self.clear_flash();
                self.observer.on_state_changed(&self.state);
            }
            Task::Restart => self.start_game(),
        }
    }

    /// Append one signal and queue its playback after the lead-in pause.
    fn extend_sequence(&mut self) {
        let profile = self.state.profile();
        let extended = sequence::extend(self.state.sequence(), &profile, &mut self.rng);
        self.state.set_sequence(extended);
        self.state.set_phase(Phase::Preparing);
        debug!(level = self.state.level(), "Sequence extended");

        self.scheduler
            .schedule(self.game_token, self.config.timing.playback_lead_ms, Task::Play);
        self.observer.on_state_changed(&self.state);
    }

    /// Schedule the full playback of the current sequence under a fresh token.
    fn play(&mut self) {
        if let Some(stale) = self.playback_token.take() {
            self.scheduler.cancel(stale);
        }
        let token = self.scheduler.issue_token();
        self.playback_token = Some(token);

        self.state.set_phase(Phase::Playback);
        self.state.clear_progress();

        let plan = PlaybackPlan::new(self.state.sequence(), &self.state.profile(), &self.config.timing);
        for (offset, step) in plan.steps() {
            self.scheduler.schedule(token, *offset, Task::Playback(*step));
        }
        debug!(level = self.state.level(), duration_ms = plan.duration(), %token, "Playback scheduled");

        self.observer.on_playback_started(self.state.level());
        self.observer.on_state_changed(&self.state);
    }

    fn playback_step(&mut self, step: PlaybackStep) {
        match step {
            PlaybackStep::FlashOn(signal) => {
                if let Some(token) = self.flash_token.take() {
                    self.scheduler.cancel(token);
                }
                self.state.set_flashing(Some(signal));
                self.observer.on_flash_on(signal);
            }
            PlaybackStep::FlashOff => self.clear_flash(),
            PlaybackStep::Complete => {
                if let Some(token) = self.playback_token.take() {
                    self.scheduler.cancel(token);
                }
                self.state.set_phase(Phase::AwaitingInput);
                debug!("Playback complete, awaiting input");
                self.observer.on_playback_complete();
            }
        }
        self.observer.on_state_changed(&self.state);
    }

    /// Light a pressed signal and queue its flash-off, superseding any
    /// earlier pending flash-off.
    fn start_press_flash(&mut self, signal: Signal) {
        if let Some(token) = self.flash_token.take() {
            self.scheduler.cancel(token);
        }
        let token = self.scheduler.issue_token();
        self.flash_token = Some(token);
        self.scheduler
            .schedule(token, self.config.timing.flash_ms, Task::ClearPressFlash);
        self.observer.on_flash_on(signal);
    }

    fn clear_flash(&mut self) {
        if self.state.flashing().is_some() {
            self.state.set_flashing(None);
            self.observer.on_flash_off();
        }
    }

    /// Cancel the game and playback groups and open a fresh game group.
    fn cancel_game_timers(&mut self) {
        self.scheduler.cancel(self.game_token);
        if let Some(token) = self.playback_token.take() {
            self.scheduler.cancel(token);
        }
        self.game_token = self.scheduler.issue_token();
    }
}
