//! Strictly Memory library - explicit state machines for small games
//!
//! The memory challenge flashes a few cells of a grid, then asks the
//! player to pick them back before a countdown runs out. The task board
//! keeps columns of cards in order as they are dragged around.
//!
//! # Architecture
//!
//! - **Games**: pure state machines ([`Session`], [`TaskBoard`]) with no
//!   clock and no rendering
//! - **Generator**: draws a fresh challenge per play-through and replaces
//!   the session on reset
//! - **Runtime**: executes timer effects on tokio and feeds firings back
//!
//! # Example
//!
//! ```
//! use strictly_memory::{Action, GameConfig, GameStatus, Session};
//!
//! let config = GameConfig::new(3, 2, 1, 5, 2).unwrap();
//! let mut session = Session::new(1, config, vec![4, 7]);
//! session.apply(Action::Start);
//! let token = session.challenge_timer().unwrap();
//! session.apply(Action::ChallengeElapsed(token));
//! session.apply(Action::Pick(7));
//! session.apply(Action::Pick(4));
//! assert_eq!(session.status(), GameStatus::Won);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game_config;
mod games;
mod runtime;

// Crate-level exports - Configuration
pub use game_config::{ConfigError, GameConfig};

// Crate-level exports - Runtime
pub use runtime::SessionRuntime;

// Crate-level exports - Memory challenge
pub use games::memory::{
    Action, CellId, CellStatus, CountdownBoundedInvariant, CrossCounts, Effect, GameGenerator,
    GameId, GameStatus, Invariant, InvariantSet, InvariantViolation, PickedSetInvariant, Session,
    SessionInvariants, TICK_PERIOD, Timer, TimerDisciplineInvariant, TimerKind, TimerToken,
    Transition, create_cells, cross_counts, sample, sample_from, sample_with,
};

// Crate-level exports - Task board
pub use games::kanban::{Column, ColumnId, DragKind, DropResult, Location, Task, TaskBoard, TaskId};
