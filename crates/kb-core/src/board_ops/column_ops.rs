use crate::{Board, Column, ColumnId, CoreError, Result as CoreErrorResult};

/// Append a new, empty column. Blank titles are ignored.
pub fn add_column(board: &Board, title: &str) -> Board {
    let title = title.trim();
    if title.is_empty() {
        return board.clone();
    }

    let column = Column::new(title.to_string());
    let mut next = board.clone();
    next.column_order_mut().push(column.id.clone());
    next.columns_mut().insert(column.id.clone(), column);
    next
}

/// Remove a column together with every task it holds.
#[track_caller]
pub fn delete_column(board: &Board, column_id: &ColumnId) -> CoreErrorResult<Board> {
    let Some(column) = board.column(column_id) else {
        return Err(CoreError::column_not_found(column_id));
    };

    let mut next = board.clone();
    for task_id in &column.task_ids {
        next.tasks_mut().remove(task_id);
    }
    next.columns_mut().remove(column_id);
    next.column_order_mut().retain(|id| id != column_id);
    Ok(next)
}

/// Replace a column's title. Blank titles are ignored.
#[track_caller]
pub fn rename_column(
    board: &Board,
    column_id: &ColumnId,
    new_title: &str,
) -> CoreErrorResult<Board> {
    if board.column(column_id).is_none() {
        return Err(CoreError::column_not_found(column_id));
    }

    let new_title = new_title.trim();
    if new_title.is_empty() {
        return Ok(board.clone());
    }

    let mut next = board.clone();
    if let Some(column) = next.columns_mut().get_mut(column_id) {
        column.title = new_title.to_string();
    }
    Ok(next)
}
