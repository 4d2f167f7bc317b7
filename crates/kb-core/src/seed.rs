//! The demo board every new session starts from.

use crate::{Board, Column, ColumnId, Priority, Task, TaskId};

use std::collections::BTreeMap;

const DEMO_TASKS: [(&str, &str, Priority); 4] = [
    ("task-1", "Take out the garbage", Priority::Low),
    ("task-2", "Watch my favorite show", Priority::Medium),
    ("task-3", "Charge my phone", Priority::High),
    ("task-4", "Cook dinner", Priority::Medium),
];

const DEMO_COLUMNS: [(&str, &str); 3] = [
    ("column-1", "To do"),
    ("column-2", "In progress"),
    ("column-3", "Done"),
];

impl Board {
    /// Four tasks, all in "To do", followed by empty "In progress" and "Done".
    pub fn demo() -> Self {
        let tasks: BTreeMap<TaskId, Task> = DEMO_TASKS
            .iter()
            .map(|(id, content, priority)| {
                let task = Task::with_id(TaskId::from(*id), content.to_string(), *priority);
                (task.id.clone(), task)
            })
            .collect();

        let mut columns: BTreeMap<ColumnId, Column> = DEMO_COLUMNS
            .iter()
            .map(|(id, title)| {
                let column = Column::with_id(ColumnId::from(*id), title.to_string());
                (column.id.clone(), column)
            })
            .collect();

        if let Some(todo) = columns.get_mut(&ColumnId::from(DEMO_COLUMNS[0].0)) {
            todo.task_ids = DEMO_TASKS.iter().map(|(id, _, _)| TaskId::from(*id)).collect();
        }

        let column_order = DEMO_COLUMNS
            .iter()
            .map(|(id, _)| ColumnId::from(*id))
            .collect();

        Board::from_parts(tasks, columns, column_order)
    }
}
