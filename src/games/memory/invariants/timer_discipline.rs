//! Timer discipline invariant.

use super::super::session::Session;
use super::super::timer::TimerKind;
use super::super::GameStatus;
use super::Invariant;

/// Invariant: a session holds the challenge delay only while memorizing
/// and the countdown only while playing, and each token is its own.
///
/// Terminal and new sessions hold no timers at all, so nothing can fire
/// into them.
pub struct TimerDisciplineInvariant;

impl Invariant<Session> for TimerDisciplineInvariant {
    fn holds(session: &Session) -> bool {
        let challenge_ok = match session.challenge_timer() {
            Some(token) => {
                session.status() == GameStatus::Challenge
                    && token.kind == TimerKind::ChallengeDelay
                    && token.game_id == session.game_id()
            }
            None => session.status() != GameStatus::Challenge,
        };
        let countdown_ok = match session.countdown_timer() {
            Some(token) => {
                session.status() == GameStatus::Playing
                    && token.kind == TimerKind::Countdown
                    && token.game_id == session.game_id()
            }
            None => session.status() != GameStatus::Playing,
        };
        challenge_ok && countdown_ok
    }

    fn description() -> &'static str {
        "Each timed phase owns exactly its own timer and no other phase holds one"
    }
}
