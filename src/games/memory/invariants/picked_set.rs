//! Picked set invariant.

use super::super::session::Session;
use super::super::utils::cross_counts;
use super::super::GameStatus;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: the picked set is duplicate-free, inside the grid, only
/// populated once play began, and never past a deciding pick while play
/// continues.
pub struct PickedSetInvariant;

impl Invariant<Session> for PickedSetInvariant {
    fn holds(session: &Session) -> bool {
        let picked = session.picked();

        let unique = picked.iter().collect::<HashSet<_>>().len() == picked.len();
        let in_grid = picked.iter().all(|&cell| cell < session.cell_count());
        let after_start = picked.is_empty()
            || matches!(
                session.status(),
                GameStatus::Playing | GameStatus::Won | GameStatus::Lost
            );

        let undecided = session.status() != GameStatus::Playing || {
            let counts = cross_counts(picked, session.challenge());
            counts.include < session.challenge().len()
                && counts.exclude < *session.config().max_wrong_attempts()
        };

        unique && in_grid && after_start && undecided
    }

    fn description() -> &'static str {
        "Picked cells are unique, on the grid, and evaluated after every pick"
    }
}
