//! First-class actions for the memory challenge.
//!
//! Player input and timer firings both arrive as actions, so a session
//! can be driven entirely by a test without any clock.

use serde::{Deserialize, Serialize};

use super::CellId;
use super::timer::{TimerKind, TimerToken};

/// Something that happens to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The player asks to begin memorizing.
    Start,
    /// The player selects a cell.
    Pick(CellId),
    /// The challenge delay fired.
    ChallengeElapsed(TimerToken),
    /// The countdown ticked.
    Tick(TimerToken),
}

impl Action {
    /// Builds the action a firing of `token` stands for.
    pub fn from_timer(token: TimerToken) -> Self {
        match token.kind {
            TimerKind::ChallengeDelay => Action::ChallengeElapsed(token),
            TimerKind::Countdown => Action::Tick(token),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Start => write!(f, "start"),
            Action::Pick(cell) => write!(f, "pick {}", cell),
            Action::ChallengeElapsed(token) | Action::Tick(token) => write!(f, "fire {}", token),
        }
    }
}
