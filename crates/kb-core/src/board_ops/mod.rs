//! The only writer of board state. Each function takes a board by reference
//! and returns a new one; the input is never modified.

pub mod board_operation;
pub mod column_ops;
pub mod move_task;
pub mod task_ops;

pub use board_operation::{BoardOperation, apply};
pub use column_ops::{add_column, delete_column, rename_column};
pub use move_task::{MoveRequest, move_task};
pub use task_ops::{add_task, delete_task, set_task_priority, update_task_details};
