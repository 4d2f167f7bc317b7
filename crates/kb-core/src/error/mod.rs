use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Stale move: expected {task_id} at index {index}, found {found:?} {location}")]
    StaleMove {
        task_id: String,
        index: usize,
        found: Option<String>,
        location: ErrorLocation,
    },

    #[error("Index {index} out of range for length {len} {location}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid board: {message} {location}")]
    InvalidBoard {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn column_not_found(id: impl ToString) -> Self {
        CoreError::NotFound {
            entity: "Column",
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn task_not_found(id: impl ToString) -> Self {
        CoreError::NotFound {
            entity: "Task",
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        CoreError::IndexOutOfRange {
            index,
            len,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_board<S: Into<String>>(message: S) -> Self {
        CoreError::InvalidBoard {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True for errors a caller should treat as "ignore this gesture":
    /// the board is unchanged and the next gesture can proceed.
    pub fn is_rejected_gesture(&self) -> bool {
        matches!(
            self,
            CoreError::NotFound { .. }
                | CoreError::StaleMove { .. }
                | CoreError::IndexOutOfRange { .. }
                | CoreError::Validation { .. }
        )
    }
}

pub type Result<T> = StdResult<T, CoreError>;
