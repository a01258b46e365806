//! Game implementations.

pub mod kanban;
pub mod memory;
