pub const DEFAULT_MAX_TITLE_LENGTH: usize = 100;
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 500;
pub const DEFAULT_MAX_COLUMNS: usize = 20;

/// Size limits a session checks before handing a command to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLimits {
    /// Maximum column title length, in characters
    pub max_title_length: usize,
    /// Maximum task content length, in characters
    pub max_content_length: usize,
    pub max_columns: usize,
}

impl Default for BoardLimits {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            max_columns: DEFAULT_MAX_COLUMNS,
        }
    }
}
