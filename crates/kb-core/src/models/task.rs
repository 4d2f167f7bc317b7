use crate::{Priority, TaskDetails, TaskId};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "TaskDetails::is_empty")]
    pub details: TaskDetails,
}

impl Task {
    /// Create a task with a fresh id and the default priority
    pub fn new(content: String) -> Self {
        Self::with_id(TaskId::generate(), content, Priority::default())
    }

    pub fn with_id(id: TaskId, content: String, priority: Priority) -> Self {
        Self {
            id,
            content,
            priority,
            details: TaskDetails::default(),
        }
    }
}
