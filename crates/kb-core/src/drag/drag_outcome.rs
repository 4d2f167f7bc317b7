use crate::Board;

#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Dropped outside any column
    Cancelled,
    /// Dropped back where it started
    Unmoved,
    Moved(Board),
}
