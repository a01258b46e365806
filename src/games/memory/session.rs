//! Session state machine for one memory challenge play-through.
//!
//! ```text
//! New --Start--> Challenge --ChallengeElapsed--> Playing --+--> Won
//!                                                          +--> Lost
//! ```
//!
//! A session is a plain value. [`Session::apply`] mutates it in place
//! and [`Session::transition`] is the by-value form; both return the
//! timer effects a driver has to carry out. Terminal sessions are never
//! revived: starting over means building a new session.

#[cfg(debug_assertions)]
use super::invariants::assert_invariants;
use super::action::Action;
use super::timer::{Effect, TICK_PERIOD, Timer, TimerKind, TimerToken};
use super::utils::{CrossCounts, cross_counts};
use super::{CellId, CellStatus, GameId, GameStatus};
use crate::GameConfig;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Result of a by-value transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The session after the action.
    pub session: Session,
    /// Effects the driver must execute, in order.
    pub effects: Vec<Effect>,
}

/// One play-through of the memory challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub(super) game_id: GameId,
    pub(super) config: GameConfig,
    pub(super) challenge: Vec<CellId>,
    pub(super) picked: Vec<CellId>,
    pub(super) status: GameStatus,
    pub(super) countdown: u32,
    pub(super) challenge_timer: Option<TimerToken>,
    pub(super) countdown_timer: Option<TimerToken>,
    next_generation: u64,
}

impl Session {
    /// Creates a session in the `New` phase.
    ///
    /// The challenge vector is authoritative: the game is won once every
    /// cell in it is picked, whatever `challenge_size` the config asks
    /// for. [`GameGenerator`](super::GameGenerator) always passes a
    /// challenge of [`GameConfig::effective_challenge_size`] cells.
    ///
    /// # Panics
    ///
    /// Panics if the challenge is empty, or if a challenge cell is outside
    /// the grid or appears twice.
    #[instrument(skip(config, challenge), fields(challenge_len = challenge.len()))]
    pub fn new(game_id: GameId, config: GameConfig, challenge: Vec<CellId>) -> Self {
        let cells = config.cell_count();
        assert!(!challenge.is_empty(), "challenge must hold at least one cell");
        assert!(
            challenge.iter().all(|&cell| cell < cells),
            "challenge cell outside the {}-cell grid: {:?}",
            cells,
            challenge
        );
        assert_eq!(
            challenge.iter().collect::<HashSet<_>>().len(),
            challenge.len(),
            "challenge cells must be distinct: {:?}",
            challenge
        );

        debug!(game_id, "Creating new session");
        Self {
            game_id,
            countdown: *config.play_seconds(),
            config,
            challenge,
            picked: Vec::new(),
            status: GameStatus::New,
            challenge_timer: None,
            countdown_timer: None,
            next_generation: 0,
        }
    }

    /// Applies an action and returns the effects to execute.
    ///
    /// Actions that make no sense in the current phase, picks outside the
    /// grid, repeated picks, and firings of timers this session no longer
    /// owns are all ignored.
    #[instrument(skip(self), fields(game_id = self.game_id, status = %self.status))]
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        let mut effects = Vec::new();
        match action {
            Action::Start => self.start(&mut effects),
            Action::Pick(cell) => self.pick(cell, &mut effects),
            Action::ChallengeElapsed(token) => self.challenge_elapsed(token, &mut effects),
            Action::Tick(token) => self.tick(token, &mut effects),
        }

        #[cfg(debug_assertions)]
        assert_invariants(self);

        effects
    }

    /// Consumes the session and returns it after `action`, with effects.
    pub fn transition(mut self, action: Action) -> Transition {
        let effects = self.apply(action);
        Transition {
            session: self,
            effects,
        }
    }

    /// Discards the session, cancelling every timer it still owns.
    #[instrument(skip(self), fields(game_id = self.game_id, status = %self.status))]
    pub fn teardown(mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.cancel_timers(&mut effects);
        debug!(cancelled = effects.len(), "Session torn down");
        effects
    }

    fn start(&mut self, effects: &mut Vec<Effect>) {
        if self.status != GameStatus::New {
            debug!("Start ignored, session already started");
            return;
        }
        self.status = GameStatus::Challenge;
        let delay = Duration::from_secs(*self.config.challenge_seconds());
        self.challenge_timer = Some(self.schedule(TimerKind::ChallengeDelay, delay, effects));
        info!(challenge = ?self.challenge, "Challenge shown");
    }

    fn challenge_elapsed(&mut self, token: TimerToken, effects: &mut Vec<Effect>) {
        if self.status != GameStatus::Challenge || self.challenge_timer != Some(token) {
            debug!(%token, "Stale challenge timer ignored");
            return;
        }
        self.challenge_timer = None;
        self.status = GameStatus::Playing;
        self.countdown = *self.config.play_seconds();
        self.countdown_timer = Some(self.schedule(TimerKind::Countdown, TICK_PERIOD, effects));
        info!(countdown = self.countdown, "Playing");
    }

    fn tick(&mut self, token: TimerToken, effects: &mut Vec<Effect>) {
        if self.status != GameStatus::Playing || self.countdown_timer != Some(token) {
            debug!(%token, "Stale countdown tick ignored");
            return;
        }
        self.countdown = self.countdown.saturating_sub(1);
        debug!(countdown = self.countdown, "Countdown ticked");
        if self.countdown == 0 {
            self.finish(GameStatus::Lost, "countdown expired", effects);
        }
    }

    fn pick(&mut self, cell: CellId, effects: &mut Vec<Effect>) {
        if self.status != GameStatus::Playing {
            debug!(cell, "Pick ignored outside play");
            return;
        }
        if cell >= self.cell_count() {
            debug!(cell, "Pick outside grid ignored");
            return;
        }
        if self.picked.contains(&cell) {
            debug!(cell, "Cell already picked");
            return;
        }

        self.picked.push(cell);
        let counts = self.pick_counts();
        debug!(cell, correct = counts.include, wrong = counts.exclude, "Cell picked");

        if counts.include == self.challenge.len() {
            self.finish(GameStatus::Won, "all challenge cells picked", effects);
        } else if counts.exclude == *self.config.max_wrong_attempts() {
            self.finish(GameStatus::Lost, "too many wrong picks", effects);
        }
    }

    fn finish(&mut self, outcome: GameStatus, cause: &'static str, effects: &mut Vec<Effect>) {
        self.cancel_timers(effects);
        self.status = outcome;
        info!(%outcome, cause, picked = self.picked.len(), countdown = self.countdown, "Game over");
    }

    fn cancel_timers(&mut self, effects: &mut Vec<Effect>) {
        effects.extend(
            [self.challenge_timer.take(), self.countdown_timer.take()]
                .into_iter()
                .flatten()
                .map(Effect::Cancel),
        );
    }

    fn schedule(&mut self, kind: TimerKind, period: Duration, effects: &mut Vec<Effect>) -> TimerToken {
        let token = TimerToken {
            game_id: self.game_id,
            kind,
            generation: self.next_generation,
        };
        self.next_generation += 1;
        effects.push(Effect::Schedule(Timer { token, period }));
        token
    }

    fn pick_counts(&self) -> CrossCounts {
        cross_counts(&self.picked, &self.challenge)
    }

    /// Identity of this play-through.
    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    /// Configuration the session was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current phase.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Seconds left on the countdown.
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Cells to memorize, in draw order.
    pub fn challenge(&self) -> &[CellId] {
        &self.challenge
    }

    /// Cells picked so far, in pick order.
    pub fn picked(&self) -> &[CellId] {
        &self.picked
    }

    /// Number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        self.config.cell_count()
    }

    /// Picks that hit a challenge cell.
    pub fn correct_picks(&self) -> usize {
        self.pick_counts().include
    }

    /// Picks that missed.
    pub fn wrong_picks(&self) -> usize {
        self.pick_counts().exclude
    }

    /// Token of the pending challenge delay, if any.
    pub fn challenge_timer(&self) -> Option<TimerToken> {
        self.challenge_timer
    }

    /// Token of the running countdown, if any.
    pub fn countdown_timer(&self) -> Option<TimerToken> {
        self.countdown_timer
    }

    /// Every timer the session currently owns.
    pub fn pending_timers(&self) -> impl Iterator<Item = TimerToken> + '_ {
        self.challenge_timer.iter().chain(self.countdown_timer.iter()).copied()
    }

    /// Visual classification of one cell, or `None` off the grid.
    pub fn cell_status(&self, cell: CellId) -> Option<CellStatus> {
        (cell < self.cell_count()).then(|| {
            CellStatus::classify(
                self.status,
                self.challenge.contains(&cell),
                self.picked.contains(&cell),
            )
        })
    }

    /// Classification of every cell in id order.
    pub fn cell_statuses(&self) -> impl Iterator<Item = (CellId, CellStatus)> + '_ {
        (0..self.cell_count()).map(|cell| {
            let status = CellStatus::classify(
                self.status,
                self.challenge.contains(&cell),
                self.picked.contains(&cell),
            );
            (cell, status)
        })
    }
}
