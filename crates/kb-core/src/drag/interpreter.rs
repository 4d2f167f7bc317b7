use crate::board_ops::move_task;
use crate::{Board, DragOutcome, DragResult, Result as CoreErrorResult};

/// Turn one completed drag gesture into at most one move.
///
/// Holds no state: the same board and gesture always give the same outcome.
#[track_caller]
pub fn interpret(board: &Board, drag: &DragResult) -> CoreErrorResult<DragOutcome> {
    let Some(request) = drag.to_move_request() else {
        return Ok(DragOutcome::Cancelled);
    };

    if request.is_identity() {
        return Ok(DragOutcome::Unmoved);
    }

    move_task(board, &request).map(DragOutcome::Moved)
}
