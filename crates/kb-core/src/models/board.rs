//! The board aggregate: every task, every column, and the column display order.

use crate::{BoardData, Column, ColumnId, CoreError, Result as CoreErrorResult, Task, TaskId};

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

/// An immutable board snapshot.
///
/// Fields are private: a `Board` handed out by the mutation API can only be
/// read. Every change produces a new `Board` through [`crate::board_ops`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BoardData")]
pub struct Board {
    tasks: BTreeMap<TaskId, Task>,
    columns: BTreeMap<ColumnId, Column>,
    column_order: Vec<ColumnId>,
}

impl Board {
    /// A board with no columns and no tasks
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &BTreeMap<TaskId, Task> {
        &self.tasks
    }

    pub fn columns(&self) -> &BTreeMap<ColumnId, Column> {
        &self.columns
    }

    /// Left-to-right display order
    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    /// Columns in display order
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order
            .iter()
            .filter_map(|id| self.columns.get(id))
    }

    /// Tasks of one column in column order
    pub fn column_tasks(&self, id: &ColumnId) -> Vec<&Task> {
        self.columns
            .get(id)
            .map(|column| {
                column
                    .task_ids
                    .iter()
                    .filter_map(|task_id| self.tasks.get(task_id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The column currently holding `task_id`
    pub fn column_of(&self, task_id: &TaskId) -> Option<&Column> {
        self.columns
            .values()
            .find(|column| column.task_ids.contains(task_id))
    }

    pub(crate) fn from_parts(
        tasks: BTreeMap<TaskId, Task>,
        columns: BTreeMap<ColumnId, Column>,
        column_order: Vec<ColumnId>,
    ) -> Self {
        Self {
            tasks,
            columns,
            column_order,
        }
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut BTreeMap<TaskId, Task> {
        &mut self.tasks
    }

    pub(crate) fn columns_mut(&mut self) -> &mut BTreeMap<ColumnId, Column> {
        &mut self.columns
    }

    pub(crate) fn column_order_mut(&mut self) -> &mut Vec<ColumnId> {
        &mut self.column_order
    }

    /// Check every board invariant.
    ///
    /// - `column_order` is a permutation of the keys of `columns`
    /// - each column and task is stored under its own id
    /// - every placed task id exists in `tasks`
    /// - every task sits in exactly one column, at exactly one position
    pub fn validate(&self) -> CoreErrorResult<()> {
        let mut seen_columns = HashSet::with_capacity(self.column_order.len());
        for column_id in &self.column_order {
            if !seen_columns.insert(column_id) {
                return Err(CoreError::invalid_board(format!(
                    "column {column_id} appears twice in columnOrder"
                )));
            }
            if !self.columns.contains_key(column_id) {
                return Err(CoreError::invalid_board(format!(
                    "columnOrder references unknown column {column_id}"
                )));
            }
        }
        if seen_columns.len() != self.columns.len() {
            return Err(CoreError::invalid_board(format!(
                "columnOrder lists {} columns but the board holds {}",
                seen_columns.len(),
                self.columns.len()
            )));
        }

        for (key, task) in &self.tasks {
            if *key != task.id {
                return Err(CoreError::invalid_board(format!(
                    "task {} stored under key {key}",
                    task.id
                )));
            }
        }

        let mut placed = HashSet::with_capacity(self.tasks.len());
        for (key, column) in &self.columns {
            if *key != column.id {
                return Err(CoreError::invalid_board(format!(
                    "column {} stored under key {key}",
                    column.id
                )));
            }
            for task_id in &column.task_ids {
                if !self.tasks.contains_key(task_id) {
                    return Err(CoreError::invalid_board(format!(
                        "column {key} references unknown task {task_id}"
                    )));
                }
                if !placed.insert(task_id) {
                    return Err(CoreError::invalid_board(format!(
                        "task {task_id} is placed more than once"
                    )));
                }
            }
        }

        if placed.len() != self.tasks.len() {
            return Err(CoreError::invalid_board(format!(
                "{} task(s) are not placed in any column",
                self.tasks.len() - placed.len()
            )));
        }

        Ok(())
    }
}

impl TryFrom<BoardData> for Board {
    type Error = CoreError;

    fn try_from(data: BoardData) -> CoreErrorResult<Self> {
        let board = Board::from_parts(data.tasks, data.columns, data.column_order);
        board.validate()?;
        Ok(board)
    }
}

impl From<Board> for BoardData {
    fn from(board: Board) -> Self {
        BoardData {
            tasks: board.tasks,
            columns: board.columns,
            column_order: board.column_order,
        }
    }
}
