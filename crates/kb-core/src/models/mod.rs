pub mod board;
pub mod board_data;
pub mod column;
pub mod column_id;
pub mod priority;
pub mod task;
pub mod task_details;
pub mod task_id;
