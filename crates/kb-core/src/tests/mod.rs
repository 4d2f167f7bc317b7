mod session;
mod task_ops;

use crate::{Board, ColumnId, TaskId};

pub(crate) const TODO: &str = "column-1";
pub(crate) const IN_PROGRESS: &str = "column-2";
pub(crate) const DONE: &str = "column-3";

pub(crate) fn column(id: &str) -> ColumnId {
    ColumnId::from(id)
}

pub(crate) fn task(id: &str) -> TaskId {
    TaskId::from(id)
}

/// Task ids of a column as plain strings, for readable assertions
pub(crate) fn task_ids(board: &Board, column_id: &str) -> Vec<String> {
    board
        .column(&column(column_id))
        .map(|c| c.task_ids.iter().map(|id| id.to_string()).collect())
        .unwrap_or_default()
}

/// `c1 = [A, B, C]`, `c2 = []`
pub(crate) fn abc_board() -> Board {
    let mut board = Board::demo();
    for id in ["task-1", "task-2", "task-3", "task-4"] {
        board = crate::board_ops::delete_task(&board, &column(TODO), &task(id));
    }
    board = crate::board_ops::delete_column(&board, &column(DONE)).unwrap();
    for content in ["A", "B", "C"] {
        board = crate::board_ops::add_task(&board, &column(TODO), content).unwrap();
    }
    board
}

/// Id of the task whose content is `content`
pub(crate) fn id_of(board: &Board, content: &str) -> TaskId {
    board
        .tasks()
        .values()
        .find(|t| t.content == content)
        .map(|t| t.id.clone())
        .unwrap()
}

/// Column task contents, in order
pub(crate) fn contents(board: &Board, column_id: &str) -> Vec<String> {
    board
        .column_tasks(&column(column_id))
        .into_iter()
        .map(|t| t.content.clone())
        .collect()
}
