//! Async driver that turns timer effects into real timers.
//!
//! Each scheduled timer is a spawned task that reports its token over a
//! channel. Cancelling aborts the task, and any token that still arrives
//! afterwards is dropped because the runtime no longer tracks it.

use crate::games::memory::{CellId, Effect, GameGenerator, Session, Timer, TimerToken};
use rand::Rng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at, sleep};
use tracing::{debug, instrument, warn};

/// Drives a [`GameGenerator`] with tokio timers.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct SessionRuntime<R = StdRng> {
    generator: GameGenerator<R>,
    timers: HashMap<TimerToken, JoinHandle<()>>,
    fired_tx: mpsc::UnboundedSender<TimerToken>,
    fired_rx: mpsc::UnboundedReceiver<TimerToken>,
}

impl<R: Rng> SessionRuntime<R> {
    /// Wraps a generator. No timers run until an action schedules one.
    #[instrument(skip(generator))]
    pub fn new(generator: GameGenerator<R>) -> Self {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        Self {
            generator,
            timers: HashMap::new(),
            fired_tx,
            fired_rx,
        }
    }

    /// The active session.
    pub fn session(&self) -> &Session {
        self.generator.session()
    }

    /// The wrapped generator.
    pub fn generator(&self) -> &GameGenerator<R> {
        &self.generator
    }

    /// Number of timers currently running.
    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    /// Starts the active session.
    pub fn start_game(&mut self) {
        let effects = self.generator.start_game();
        self.execute(effects);
    }

    /// Picks a cell in the active session.
    pub fn pick_cell(&mut self, cell: CellId) {
        let effects = self.generator.pick_cell(cell);
        self.execute(effects);
    }

    /// Replaces the active session, cancelling all of its timers.
    pub fn reset_game(&mut self) {
        let effects = self.generator.reset_game();
        self.execute(effects);
    }

    /// Waits for the next timer firing.
    ///
    /// Cancel safe, so it can sit in a `select!` next to player input.
    pub async fn next_timer(&mut self) -> Option<TimerToken> {
        self.fired_rx.recv().await
    }

    /// Delivers a firing to the session, unless its timer was cancelled.
    #[instrument(skip(self))]
    pub fn handle_timer(&mut self, token: TimerToken) {
        if !self.timers.contains_key(&token) {
            debug!(%token, "Dropping firing of cancelled timer");
            return;
        }
        if !token.kind.is_periodic() {
            self.timers.remove(&token);
        }
        let effects = self.generator.fire(token);
        self.execute(effects);
    }

    /// Waits for the next firing and delivers it.
    pub async fn step(&mut self) -> Option<TimerToken> {
        let token = self.next_timer().await?;
        self.handle_timer(token);
        Some(token)
    }

    /// Runs effects in order.
    #[instrument(skip(self, effects), fields(count = effects.len()))]
    pub fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Schedule(timer) => self.schedule(timer),
                Effect::Cancel(token) => self.cancel(token),
            }
        }
    }

    fn schedule(&mut self, timer: Timer) {
        let Timer { token, period } = timer;
        let tx = self.fired_tx.clone();
        debug!(%token, ?period, "Scheduling timer");

        let handle = if token.kind.is_periodic() {
            tokio::spawn(async move {
                let mut ticks = interval_at(Instant::now() + period, period);
                loop {
                    ticks.tick().await;
                    if tx.send(token).is_err() {
                        break;
                    }
                }
            })
        } else {
            tokio::spawn(async move {
                sleep(period).await;
                let _ = tx.send(token);
            })
        };

        if let Some(previous) = self.timers.insert(token, handle) {
            warn!(%token, "Timer token scheduled twice, aborting the older task");
            previous.abort();
        }
    }

    fn cancel(&mut self, token: TimerToken) {
        match self.timers.remove(&token) {
            Some(handle) => {
                handle.abort();
                debug!(%token, "Timer cancelled");
            }
            None => debug!(%token, "Cancel for timer that already finished"),
        }
    }
}

impl<R> Drop for SessionRuntime<R> {
    fn drop(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }
}
