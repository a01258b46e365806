//! Drop handling and construction for the task board.

use super::types::{Column, ColumnId, DragKind, DropResult, Task, TaskBoard, TaskId};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

impl TaskBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            columns: BTreeMap::new(),
            column_order: Vec::new(),
        }
    }

    /// Appends a column on the right. Returns false if the id is taken.
    #[instrument(skip(self, title))]
    pub fn add_column(&mut self, id: impl Into<ColumnId> + std::fmt::Debug, title: impl Into<String>) -> bool {
        let id = id.into();
        if self.columns.contains_key(&id) {
            warn!(column = %id, "Column already exists");
            return false;
        }
        self.column_order.push(id.clone());
        self.columns.insert(
            id.clone(),
            Column {
                id,
                title: title.into(),
                task_ids: Vec::new(),
            },
        );
        true
    }

    /// Appends a task to the bottom of a column.
    ///
    /// Returns false if the column is unknown or the task id is taken.
    #[instrument(skip(self, content))]
    pub fn add_task(
        &mut self,
        column_id: &str,
        id: impl Into<TaskId> + std::fmt::Debug,
        content: impl Into<String>,
    ) -> bool {
        let id = id.into();
        if self.tasks.contains_key(&id) {
            warn!(task = %id, "Task already exists");
            return false;
        }
        let Some(column) = self.columns.get_mut(column_id) else {
            warn!(column = column_id, "Unknown column");
            return false;
        };
        column.task_ids.push(id.clone());
        self.tasks.insert(
            id.clone(),
            Task {
                id,
                content: content.into(),
            },
        );
        true
    }

    /// Looks up a task.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Looks up a column.
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.get(id)
    }

    /// Column ids from left to right.
    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    /// Columns from left to right, each with its tasks from top to bottom.
    pub fn columns_in_order(&self) -> impl Iterator<Item = (&Column, Vec<&Task>)> + '_ {
        self.column_order
            .iter()
            .filter_map(|id| self.columns.get(id))
            .map(|column| {
                let tasks = column
                    .task_ids
                    .iter()
                    .filter_map(|id| self.tasks.get(id))
                    .collect();
                (column, tasks)
            })
    }

    /// Applies a finished drag. Returns true if the board changed.
    ///
    /// Drops outside any area, drops back onto the starting slot, unknown
    /// columns, and sources that do not hold the dragged id are ignored.
    /// Destination indices past the end append.
    #[instrument(skip(self), fields(draggable = %drop.draggable_id, kind = %drop.kind))]
    pub fn on_drag_end(&mut self, drop: &DropResult) -> bool {
        let Some(destination) = &drop.destination else {
            debug!("Dropped outside any area");
            return false;
        };
        let source = &drop.source;
        if destination == source {
            debug!("Dropped back where it started");
            return false;
        }

        let moved = match drop.kind {
            DragKind::Column => {
                take_at(&mut self.column_order, source.index, &drop.draggable_id)
                    && insert_clamped(&mut self.column_order, destination.index, &drop.draggable_id)
            }
            DragKind::Task if source.droppable_id == destination.droppable_id => {
                match self.columns.get_mut(&source.droppable_id) {
                    Some(column) => {
                        take_at(&mut column.task_ids, source.index, &drop.draggable_id)
                            && insert_clamped(&mut column.task_ids, destination.index, &drop.draggable_id)
                    }
                    None => false,
                }
            }
            DragKind::Task => {
                if !self.columns.contains_key(&destination.droppable_id) {
                    false
                } else {
                    let taken = self
                        .columns
                        .get_mut(&source.droppable_id)
                        .is_some_and(|start| take_at(&mut start.task_ids, source.index, &drop.draggable_id));
                    taken
                        && self
                            .columns
                            .get_mut(&destination.droppable_id)
                            .is_some_and(|finish| {
                                insert_clamped(&mut finish.task_ids, destination.index, &drop.draggable_id)
                            })
                }
            }
        };

        if moved {
            info!(
                from = %source.droppable_id,
                from_index = source.index,
                to = %destination.droppable_id,
                to_index = destination.index,
                "Drop applied"
            );
        } else {
            warn!(?source, ?destination, "Drop ignored, board does not match");
        }
        moved
    }
}

/// Removes `expected` from `ids[index]`, only if it is there.
fn take_at(ids: &mut Vec<String>, index: usize, expected: &str) -> bool {
    if ids.get(index).map(String::as_str) == Some(expected) {
        ids.remove(index);
        true
    } else {
        false
    }
}

fn insert_clamped(ids: &mut Vec<String>, index: usize, id: &str) -> bool {
    ids.insert(index.min(ids.len()), id.to_string());
    true
}

impl Default for TaskBoard {
    /// A small demo board with three columns.
    fn default() -> Self {
        let mut board = Self::new();
        board.add_column("column-1", "To do");
        board.add_column("column-2", "In progress");
        board.add_column("column-3", "Done");
        board.add_task("column-1", "task-1", "Take out the garbage");
        board.add_task("column-1", "task-2", "Watch my favorite show");
        board.add_task("column-1", "task-3", "Charge my phone");
        board.add_task("column-1", "task-4", "Cook dinner");
        board
    }
}
