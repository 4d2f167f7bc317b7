use crate::board_ops::{
    add_column, add_task, delete_column, delete_task, move_task, rename_column,
    set_task_priority, update_task_details,
};
use crate::{Board, ColumnId, MoveRequest, Priority, Result as CoreErrorResult, TaskDetails, TaskId};

use serde::{Deserialize, Serialize};

/// Every change the board accepts, as a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BoardOperation {
    AddColumn {
        title: String,
    },
    DeleteColumn {
        column_id: ColumnId,
    },
    RenameColumn {
        column_id: ColumnId,
        title: String,
    },
    AddTask {
        column_id: ColumnId,
        content: String,
    },
    DeleteTask {
        column_id: ColumnId,
        task_id: TaskId,
    },
    UpdateTaskDetails {
        task_id: TaskId,
        details: TaskDetails,
    },
    SetTaskPriority {
        task_id: TaskId,
        priority: Priority,
    },
    MoveTask(MoveRequest),
}

impl BoardOperation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddColumn { .. } => "add_column",
            Self::DeleteColumn { .. } => "delete_column",
            Self::RenameColumn { .. } => "rename_column",
            Self::AddTask { .. } => "add_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::UpdateTaskDetails { .. } => "update_task_details",
            Self::SetTaskPriority { .. } => "set_task_priority",
            Self::MoveTask(_) => "move_task",
        }
    }
}

/// `Board × Operation → Board`
#[track_caller]
pub fn apply(board: &Board, operation: &BoardOperation) -> CoreErrorResult<Board> {
    match operation {
        BoardOperation::AddColumn { title } => Ok(add_column(board, title)),
        BoardOperation::DeleteColumn { column_id } => delete_column(board, column_id),
        BoardOperation::RenameColumn { column_id, title } => {
            rename_column(board, column_id, title)
        }
        BoardOperation::AddTask { column_id, content } => add_task(board, column_id, content),
        BoardOperation::DeleteTask { column_id, task_id } => {
            Ok(delete_task(board, column_id, task_id))
        }
        BoardOperation::UpdateTaskDetails { task_id, details } => {
            update_task_details(board, task_id, details.clone())
        }
        BoardOperation::SetTaskPriority { task_id, priority } => {
            set_task_priority(board, task_id, *priority)
        }
        BoardOperation::MoveTask(request) => move_task(board, request),
    }
}
