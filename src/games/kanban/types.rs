//! Task board data model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a task card.
pub type TaskId = String;

/// Identifier of a column.
pub type ColumnId = String;

/// A task card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id.
    pub id: TaskId,
    /// Card text.
    pub content: String,
}

/// A column holding task ids in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Unique id.
    pub id: ColumnId,
    /// Column heading.
    pub title: String,
    /// Tasks from top to bottom.
    pub task_ids: Vec<TaskId>,
}

/// The whole board: tasks, columns, and the left-to-right column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBoard {
    pub(super) tasks: BTreeMap<TaskId, Task>,
    pub(super) columns: BTreeMap<ColumnId, Column>,
    pub(super) column_order: Vec<ColumnId>,
}

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DragKind {
    /// A whole column, dropped within the column strip.
    Column,
    /// A task card, dropped into some column.
    Task,
}

/// A slot in a droppable area.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// The droppable area: a column id, or the column strip.
    pub droppable_id: String,
    /// Position within that area.
    pub index: usize,
}

impl Location {
    /// Creates a location.
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// Outcome of a drag gesture, as reported by the drag-and-drop layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropResult {
    /// Id of the dragged task or column.
    pub draggable_id: String,
    /// What was dragged.
    #[serde(rename = "type")]
    pub kind: DragKind,
    /// Where the drag began.
    pub source: Location,
    /// Where it was dropped; `None` if dropped outside any area.
    pub destination: Option<Location>,
}
