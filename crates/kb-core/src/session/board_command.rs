use crate::{BoardOperation, DragResult};

use serde::{Deserialize, Serialize};

/// One user gesture: either a finished drag or a direct edit.
///
/// On the wire a drag is the drop-result record itself and an edit is an
/// `op`-tagged operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoardCommand {
    DragEnd(DragResult),
    Operation(BoardOperation),
}

impl BoardCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DragEnd(_) => "drag_end",
            Self::Operation(operation) => operation.name(),
        }
    }
}

impl From<BoardOperation> for BoardCommand {
    fn from(operation: BoardOperation) -> Self {
        Self::Operation(operation)
    }
}

impl From<DragResult> for BoardCommand {
    fn from(drag: DragResult) -> Self {
        Self::DragEnd(drag)
    }
}
