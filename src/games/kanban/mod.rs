//! Task board: columns of task cards, reordered by drag and drop.

mod board;
mod types;

pub use types::{Column, ColumnId, DragKind, DropResult, Location, Task, TaskBoard, TaskId};
