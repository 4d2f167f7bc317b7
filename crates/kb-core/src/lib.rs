pub mod board_ops;
pub mod drag;
pub mod error;
pub mod models;
pub mod seed;
pub mod session;

#[cfg(test)]
mod tests;

pub use board_ops::{BoardOperation, MoveRequest};
pub use drag::drag_outcome::DragOutcome;
pub use drag::drag_result::DragResult;
pub use drag::draggable_location::DraggableLocation;
pub use drag::interpreter::interpret;
pub use error::{CoreError, Result};
pub use models::board::Board;
pub use models::board_data::BoardData;
pub use models::column::Column;
pub use models::column_id::ColumnId;
pub use models::priority::Priority;
pub use models::task::Task;
pub use models::task_details::{Person, TaskComment, TaskDetails};
pub use models::task_id::TaskId;
pub use session::board_command::BoardCommand;
pub use session::board_limits::BoardLimits;
pub use session::board_session::BoardSession;
