pub mod board_command;
pub mod board_limits;
pub mod board_session;
