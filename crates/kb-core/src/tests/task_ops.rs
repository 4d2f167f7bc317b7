use crate::board_ops::{add_task, delete_task, set_task_priority, update_task_details};
use crate::tests::{DONE, IN_PROGRESS, TODO, column, task, task_ids};
use crate::{Board, CoreError, Person, Priority, TaskDetails};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};

// =========================================================================
// add_task
// =========================================================================

#[test]
fn given_content_when_add_task_then_appended_with_medium_priority() {
    // Given
    let board = Board::demo();

    // When
    let next = add_task(&board, &column(IN_PROGRESS), "Write report").unwrap();

    // Then
    let ids = &next.column(&column(IN_PROGRESS)).unwrap().task_ids;
    assert_that!(ids.len(), eq(1));
    let created = next.task(&ids[0]).unwrap();
    assert_that!(created.content.as_str(), eq("Write report"));
    assert_that!(created.priority, eq(Priority::Medium));
    assert!(created.details.is_empty());
    assert_that!(next.validate(), ok(anything()));
}

#[test]
fn given_non_empty_column_when_add_task_then_goes_to_end() {
    let next = add_task(&Board::demo(), &column(TODO), "Last").unwrap();

    let ids = task_ids(&next, TODO);
    assert_that!(ids.len(), eq(5));
    assert_eq!(&ids[..4], &["task-1", "task-2", "task-3", "task-4"]);
}

#[test]
fn given_blank_content_when_add_task_then_board_unchanged() {
    let board = Board::demo();

    let next = add_task(&board, &column(TODO), "  ").unwrap();

    assert_eq!(next, board);
}

#[test]
fn given_unknown_column_when_add_task_then_not_found() {
    let result = add_task(&Board::demo(), &column("column-42"), "Orphan");

    assert!(matches!(result, Err(CoreError::NotFound { entity: "Column", .. })));
}

#[test]
fn given_deleted_task_when_add_task_then_id_not_reused() {
    // Given
    let board = delete_task(&Board::demo(), &column(TODO), &task("task-4"));

    // When
    let next = add_task(&board, &column(TODO), "Cook dinner").unwrap();

    // Then
    let new_id = next.column(&column(TODO)).unwrap().task_ids.last().cloned().unwrap();
    assert_ne!(new_id, task("task-4"));
    assert_ne!(new_id, task("task-5"));
}

// =========================================================================
// delete_task
// =========================================================================

#[test]
fn given_added_task_when_deleted_then_board_equal_to_original() {
    // Given
    let board = Board::demo();
    let added = add_task(&board, &column(DONE), "x").unwrap();
    let new_id = added.column(&column(DONE)).unwrap().task_ids[0].clone();

    // When
    let next = delete_task(&added, &column(DONE), &new_id);

    // Then
    assert_eq!(next, board);
}

#[test]
fn given_task_when_deleted_then_removed_from_column_and_tasks() {
    let next = delete_task(&Board::demo(), &column(TODO), &task("task-2"));

    assert_eq!(task_ids(&next, TODO), vec!["task-1", "task-3", "task-4"]);
    assert!(next.task(&task("task-2")).is_none());
    assert_that!(next.validate(), ok(anything()));
}

#[test]
fn given_missing_ids_when_delete_task_then_no_op() {
    let board = Board::demo();

    assert_eq!(delete_task(&board, &column("column-9"), &task("task-1")), board);
    assert_eq!(delete_task(&board, &column(TODO), &task("task-9")), board);
}

#[test]
fn given_task_in_other_column_when_delete_task_then_no_op() {
    // Given
    let board = Board::demo();

    // When
    let next = delete_task(&board, &column(DONE), &task("task-1"));

    // Then
    assert_eq!(next, board);
    assert_that!(next.validate(), ok(anything()));
}

// =========================================================================
// Details and priority
// =========================================================================

#[test]
fn given_details_when_updated_then_carried_through_later_moves() {
    // Given
    let details = TaskDetails {
        description: Some("Bins go out on Tuesday".to_string()),
        assignee: Some(Person {
            name: "Sam".to_string(),
            avatar: None,
        }),
        labels: vec!["chores".to_string()],
        ..TaskDetails::default()
    };

    // When
    let next = update_task_details(&Board::demo(), &task("task-1"), details.clone()).unwrap();
    let next = crate::board_ops::move_task(
        &next,
        &crate::MoveRequest {
            task_id: task("task-1"),
            source_column: column(TODO),
            source_index: 0,
            dest_column: column(DONE),
            dest_index: 0,
        },
    )
    .unwrap();

    // Then
    assert_eq!(next.task(&task("task-1")).unwrap().details, details);
}

#[test]
fn given_unknown_task_when_details_updated_then_not_found() {
    let result = update_task_details(&Board::demo(), &task("ghost"), TaskDetails::default());

    assert!(matches!(result, Err(CoreError::NotFound { entity: "Task", .. })));
}

#[test]
fn given_priority_when_set_then_replaced() {
    let next = set_task_priority(&Board::demo(), &task("task-2"), Priority::High).unwrap();

    assert_that!(next.task(&task("task-2")).unwrap().priority, eq(Priority::High));
    assert!(set_task_priority(&next, &task("ghost"), Priority::Low).is_err());
}
