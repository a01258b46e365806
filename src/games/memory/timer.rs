//! Explicit timer tokens and the effects a transition asks a driver to run.
//!
//! A session never sleeps or spawns anything itself. Transitions that
//! need time to pass return [`Effect::Schedule`], and transitions that
//! end a timed phase return [`Effect::Cancel`] for the timer that phase
//! owned. A driver executes both and feeds timer firings back in as
//! actions carrying the same token.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::GameId;

/// Period of the playing countdown.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// The two kinds of suspension a session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum TimerKind {
    /// One-shot delay that ends the challenge phase.
    ChallengeDelay,
    /// Periodic countdown tick while playing.
    Countdown,
}

impl TimerKind {
    /// Returns true if the timer keeps firing until cancelled.
    pub fn is_periodic(self) -> bool {
        matches!(self, TimerKind::Countdown)
    }
}

/// Identifies one scheduled timer.
///
/// Tokens are unique within a session through `generation`, and across
/// sessions through `game_id`, so a firing can always be matched to the
/// exact timer that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken {
    /// Session that owns the timer.
    pub game_id: GameId,
    /// What the timer drives.
    pub kind: TimerKind,
    /// Per-session sequence number.
    pub generation: u64,
}

impl std::fmt::Display for TimerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}/{}", self.kind, self.game_id, self.generation)
    }
}

/// A timer a driver should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timer {
    /// Token to report back on every firing.
    pub token: TimerToken,
    /// Delay before the first firing, and between firings if periodic.
    pub period: Duration,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Start a timer.
    Schedule(Timer),
    /// Stop a timer; any firing already in flight must be ignored.
    Cancel(TimerToken),
}
