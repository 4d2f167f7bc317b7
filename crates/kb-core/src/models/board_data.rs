use crate::{Column, ColumnId, Task, TaskId};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Unchecked board record, as read from JSON.
///
/// Only becomes a [`crate::Board`] through `TryFrom`, which enforces the
/// board invariants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardData {
    #[serde(default)]
    pub tasks: BTreeMap<TaskId, Task>,
    #[serde(default)]
    pub columns: BTreeMap<ColumnId, Column>,
    #[serde(default)]
    pub column_order: Vec<ColumnId>,
}
