use crate::board_ops::apply;
use crate::drag::interpreter::interpret;
use crate::{
    Board, BoardCommand, BoardLimits, BoardOperation, CoreError, DragOutcome, DragResult,
    Result as CoreErrorResult,
};

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::RwLock;

/// Owner of the current board for one session.
///
/// Commands hold the write lock from validation to swap, so they apply one
/// at a time and each one sees the result of the previous. A rejected
/// command leaves the board exactly as it was.
#[derive(Clone)]
pub struct BoardSession {
    inner: Arc<RwLock<Board>>,
    limits: BoardLimits,
}

impl BoardSession {
    pub fn new(board: Board, limits: BoardLimits) -> Self {
        Self {
            inner: Arc::new(RwLock::new(board)),
            limits,
        }
    }

    /// Copy of the current board
    pub async fn snapshot(&self) -> Board {
        self.inner.read().await.clone()
    }

    /// Apply one command and return the resulting board.
    pub async fn apply(&self, command: BoardCommand) -> CoreErrorResult<Board> {
        let mut current = self.inner.write().await;

        let result = match &command {
            BoardCommand::DragEnd(drag) => {
                interpret(&current, drag).map(|outcome| Self::adopt(&current, outcome))
            }
            BoardCommand::Operation(operation) => self
                .check_limits(&current, operation)
                .and_then(|()| apply(&current, operation)),
        };

        match result {
            Ok(next) => {
                debug!(
                    "Applied {} ({} columns, {} tasks)",
                    command.name(),
                    next.columns().len(),
                    next.tasks().len()
                );
                *current = next.clone();
                Ok(next)
            }
            Err(e) => {
                warn!("Rejected {}: {}", command.name(), e);
                Err(e)
            }
        }
    }

    /// Interpret a finished drag against the current board.
    pub async fn drag_end(&self, drag: DragResult) -> CoreErrorResult<DragOutcome> {
        let mut current = self.inner.write().await;

        match interpret(&current, &drag) {
            Ok(outcome) => {
                if let DragOutcome::Moved(next) = &outcome {
                    *current = next.clone();
                }
                debug!(
                    "Drag of {} ended: {}",
                    drag.draggable_id,
                    Self::outcome_name(&outcome)
                );
                Ok(outcome)
            }
            Err(e) => {
                warn!("Rejected drag of {}: {}", drag.draggable_id, e);
                Err(e)
            }
        }
    }

    fn adopt(current: &Board, outcome: DragOutcome) -> Board {
        match outcome {
            DragOutcome::Moved(next) => next,
            DragOutcome::Cancelled | DragOutcome::Unmoved => current.clone(),
        }
    }

    fn outcome_name(outcome: &DragOutcome) -> &'static str {
        match outcome {
            DragOutcome::Cancelled => "cancelled",
            DragOutcome::Unmoved => "unmoved",
            DragOutcome::Moved(_) => "moved",
        }
    }

    #[track_caller]
    fn check_limits(&self, board: &Board, operation: &BoardOperation) -> CoreErrorResult<()> {
        match operation {
            // Blank titles are an engine no-op, not a limit violation
            BoardOperation::AddColumn { title } if title.trim().is_empty() => Ok(()),
            BoardOperation::AddColumn { title } => {
                if board.columns().len() >= self.limits.max_columns {
                    return Err(CoreError::validation(format!(
                        "board already has the maximum of {} columns",
                        self.limits.max_columns
                    )));
                }
                self.check_length("title", title, self.limits.max_title_length)
            }
            BoardOperation::RenameColumn { title, .. } => {
                self.check_length("title", title, self.limits.max_title_length)
            }
            BoardOperation::AddTask { content, .. } => {
                self.check_length("content", content, self.limits.max_content_length)
            }
            _ => Ok(()),
        }
    }

    #[track_caller]
    fn check_length(&self, field: &str, value: &str, max: usize) -> CoreErrorResult<()> {
        let length = value.trim().chars().count();
        if length > max {
            return Err(CoreError::validation(format!(
                "{field} must be at most {max} characters, got {length}"
            )));
        }
        Ok(())
    }
}
