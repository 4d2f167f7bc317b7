//! kb-cli library
//!
//! Script parsing and replay, exported for the `kb` binary and its tests.

pub mod board_file;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod replay;
pub mod script;


pub use error::{CliError, Result as CliErrorResult};
