use crate::{
    Board, ColumnId, CoreError, Priority, Result as CoreErrorResult, Task, TaskDetails, TaskId,
};

/// Create a task at the end of a column. Blank content is ignored.
#[track_caller]
pub fn add_task(board: &Board, column_id: &ColumnId, content: &str) -> CoreErrorResult<Board> {
    if board.column(column_id).is_none() {
        return Err(CoreError::column_not_found(column_id));
    }

    let content = content.trim();
    if content.is_empty() {
        return Ok(board.clone());
    }

    let task = Task::new(content.to_string());
    let mut next = board.clone();
    if let Some(column) = next.columns_mut().get_mut(column_id) {
        column.task_ids.push(task.id.clone());
    }
    next.tasks_mut().insert(task.id.clone(), task);
    Ok(next)
}

/// Remove a task from a column and from the board.
///
/// Idempotent: an unknown column, or a task that is not in that column,
/// leaves the board as it was.
pub fn delete_task(board: &Board, column_id: &ColumnId, task_id: &TaskId) -> Board {
    let Some(position) = board
        .column(column_id)
        .and_then(|column| column.position_of(task_id))
    else {
        return board.clone();
    };

    let mut next = board.clone();
    if let Some(column) = next.columns_mut().get_mut(column_id) {
        column.task_ids.remove(position);
    }
    next.tasks_mut().remove(task_id);
    next
}

/// Replace the detail-view fields of a task.
#[track_caller]
pub fn update_task_details(
    board: &Board,
    task_id: &TaskId,
    details: TaskDetails,
) -> CoreErrorResult<Board> {
    if board.task(task_id).is_none() {
        return Err(CoreError::task_not_found(task_id));
    }

    let mut next = board.clone();
    if let Some(task) = next.tasks_mut().get_mut(task_id) {
        task.details = details;
    }
    Ok(next)
}

#[track_caller]
pub fn set_task_priority(
    board: &Board,
    task_id: &TaskId,
    priority: Priority,
) -> CoreErrorResult<Board> {
    if board.task(task_id).is_none() {
        return Err(CoreError::task_not_found(task_id));
    }

    let mut next = board.clone();
    if let Some(task) = next.tasks_mut().get_mut(task_id) {
        task.priority = priority;
    }
    Ok(next)
}
