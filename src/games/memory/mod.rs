//! Memory challenge: memorize highlighted cells, then pick them back.

mod action;
mod generator;
mod invariants;
mod session;
mod timer;
mod types;
mod utils;

pub use action::Action;
pub use generator::GameGenerator;
pub use invariants::{
    CountdownBoundedInvariant, Invariant, InvariantSet, InvariantViolation, PickedSetInvariant,
    SessionInvariants, TimerDisciplineInvariant,
};
pub use session::{Session, Transition};
pub use timer::{Effect, TICK_PERIOD, Timer, TimerKind, TimerToken};
pub use types::{CellId, CellStatus, GameId, GameStatus};
pub use utils::{CrossCounts, create_cells, cross_counts, sample, sample_from, sample_with};
