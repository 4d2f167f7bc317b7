//! Relocating one task id within a column or between two columns.

use crate::{Board, ColumnId, CoreError, Result as CoreErrorResult, TaskId};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// One move: take `task_id` from `source_index` of `source_column` and put
/// it at `dest_index` of `dest_column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub task_id: TaskId,
    pub source_column: ColumnId,
    pub source_index: usize,
    pub dest_column: ColumnId,
    pub dest_index: usize,
}

impl MoveRequest {
    pub fn is_identity(&self) -> bool {
        self.source_column == self.dest_column && self.source_index == self.dest_index
    }
}

/// Apply a move.
///
/// `dest_index` is measured after the task has been removed from its
/// source, so within one column it may range up to `len - 1` and across
/// columns up to the destination's length (append at the tail).
///
/// Fails with `NotFound` for an unknown column, `IndexOutOfRange` for an
/// index past the valid range, and `StaleMove` when the task at
/// `source_index` is not `task_id`.
///
/// An identity move (same column, same index) goes through the same
/// column, index and staleness checks before it returns the board
/// unchanged, so a stale identity move is still an error.
#[track_caller]
pub fn move_task(board: &Board, request: &MoveRequest) -> CoreErrorResult<Board> {
    let Some(source) = board.column(&request.source_column) else {
        return Err(CoreError::column_not_found(&request.source_column));
    };
    let Some(dest) = board.column(&request.dest_column) else {
        return Err(CoreError::column_not_found(&request.dest_column));
    };

    let Some(found) = source.task_ids.get(request.source_index) else {
        return Err(CoreError::index_out_of_range(
            request.source_index,
            source.len(),
        ));
    };
    if *found != request.task_id {
        return Err(CoreError::StaleMove {
            task_id: request.task_id.to_string(),
            index: request.source_index,
            found: Some(found.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if request.is_identity() {
        return Ok(board.clone());
    }

    let same_column = request.source_column == request.dest_column;
    let dest_len = if same_column {
        source.len() - 1
    } else {
        dest.len()
    };
    if request.dest_index > dest_len {
        return Err(CoreError::index_out_of_range(request.dest_index, dest_len));
    }

    let mut next = board.clone();
    let columns = next.columns_mut();

    if let Some(column) = columns.get_mut(&request.source_column) {
        column.task_ids.remove(request.source_index);
    }
    if let Some(column) = columns.get_mut(&request.dest_column) {
        column
            .task_ids
            .insert(request.dest_index, request.task_id.clone());
    }

    Ok(next)
}
