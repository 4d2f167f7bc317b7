use crate::ColumnId;

use serde::{Deserialize, Serialize};

/// A slot on the board: a column and a position inside it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraggableLocation {
    pub droppable_id: ColumnId,
    pub index: usize,
}

impl DraggableLocation {
    pub fn new(droppable_id: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}
