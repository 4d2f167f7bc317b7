use crate::{DraggableLocation, MoveRequest, TaskId};

use serde::{Deserialize, Serialize};

/// What the presentation layer reports when a drag gesture ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragResult {
    pub draggable_id: TaskId,
    pub source: DraggableLocation,
    /// `None` when the task was dropped outside every column
    #[serde(default)]
    pub destination: Option<DraggableLocation>,
}

impl DragResult {
    /// The move this gesture asks for, if it resolved a destination
    pub fn to_move_request(&self) -> Option<MoveRequest> {
        self.destination.as_ref().map(|destination| MoveRequest {
            task_id: self.draggable_id.clone(),
            source_column: self.source.droppable_id.clone(),
            source_index: self.source.index,
            dest_column: destination.droppable_id.clone(),
            dest_index: destination.index,
        })
    }
}
