//! Countdown bounds invariant.

use super::super::session::Session;
use super::super::GameStatus;
use super::Invariant;

/// Invariant: the countdown never exceeds the configured play time and is
/// still running whenever the session is playing.
pub struct CountdownBoundedInvariant;

impl Invariant<Session> for CountdownBoundedInvariant {
    fn holds(session: &Session) -> bool {
        let bounded = session.countdown() <= *session.config().play_seconds();
        let running = session.status() != GameStatus::Playing || session.countdown() > 0;
        bounded && running
    }

    fn description() -> &'static str {
        "Countdown stays within play time and is positive while playing"
    }
}
