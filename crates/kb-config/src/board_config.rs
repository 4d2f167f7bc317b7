use crate::{ConfigError, ConfigErrorResult, SeedKind};

use kb_core::BoardLimits;
use serde::Deserialize;

// Board limits
pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;

pub const MIN_CONTENT_LENGTH: usize = 1;
pub const MAX_CONTENT_LENGTH: usize = 10000;

pub const MIN_COLUMNS: usize = 1;
pub const MAX_COLUMNS: usize = 200;

/// Board session settings.
///
/// The limits are checked before a command reaches the board engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Maximum column title length, in characters
    pub max_title_length: usize,
    /// Maximum task content length, in characters
    pub max_content_length: usize,
    /// Maximum number of columns on one board
    pub max_columns: usize,
    pub seed: SeedKind,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let limits = BoardLimits::default();
        Self {
            max_title_length: limits.max_title_length,
            max_content_length: limits.max_content_length,
            max_columns: limits.max_columns,
            seed: SeedKind::default(),
        }
    }
}

impl BoardConfig {
    /// Session limits for this section
    pub fn limits(&self) -> BoardLimits {
        BoardLimits {
            max_title_length: self.max_title_length,
            max_content_length: self.max_content_length,
            max_columns: self.max_columns,
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_title_length < MIN_TITLE_LENGTH || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::board(format!(
                "board.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_content_length < MIN_CONTENT_LENGTH
            || self.max_content_length > MAX_CONTENT_LENGTH
        {
            return Err(ConfigError::board(format!(
                "board.max_content_length must be {}-{}, got {}",
                MIN_CONTENT_LENGTH, MAX_CONTENT_LENGTH, self.max_content_length
            )));
        }

        if self.max_columns < MIN_COLUMNS || self.max_columns > MAX_COLUMNS {
            return Err(ConfigError::board(format!(
                "board.max_columns must be {}-{}, got {}",
                MIN_COLUMNS, MAX_COLUMNS, self.max_columns
            )));
        }

        Ok(())
    }
}
