use crate::tests::{DONE, TODO, column, task, task_ids};
use crate::{
    Board, BoardCommand, BoardLimits, BoardOperation, BoardSession, CoreError, DragOutcome,
    DragResult, DraggableLocation, MoveRequest,
};

fn session() -> BoardSession {
    BoardSession::new(Board::demo(), BoardLimits::default())
}

fn stale_move() -> BoardCommand {
    BoardOperation::MoveTask(MoveRequest {
        task_id: task("task-4"),
        source_column: column(TODO),
        source_index: 0,
        dest_column: column(DONE),
        dest_index: 0,
    })
    .into()
}

#[tokio::test]
async fn given_operation_when_applied_then_session_adopts_new_board() {
    // Given
    let session = session();

    // When
    let returned = session
        .apply(
            BoardOperation::AddColumn {
                title: "Review".to_string(),
            }
            .into(),
        )
        .await
        .unwrap();

    // Then
    let current = session.snapshot().await;
    assert_eq!(current, returned);
    assert_eq!(current.column_order().len(), 4);
}

#[tokio::test]
async fn given_rejected_command_when_applied_then_board_unchanged() {
    // Given
    let session = session();
    let before = session.snapshot().await;

    // When
    let result = session.apply(stale_move()).await;

    // Then
    assert!(matches!(result, Err(CoreError::StaleMove { .. })));
    assert_eq!(session.snapshot().await, before);
}

#[tokio::test]
async fn given_rejected_command_when_next_command_applied_then_succeeds() {
    let session = session();

    let _ = session.apply(stale_move()).await;
    let result = session
        .apply(
            BoardOperation::DeleteTask {
                column_id: column(TODO),
                task_id: task("task-1"),
            }
            .into(),
        )
        .await;

    assert!(result.is_ok());
    assert_eq!(
        task_ids(&session.snapshot().await, TODO),
        vec!["task-2", "task-3", "task-4"]
    );
}

#[tokio::test]
async fn given_drag_command_when_applied_then_task_moved() {
    // Given
    let session = session();
    let command = BoardCommand::DragEnd(DragResult {
        draggable_id: task("task-1"),
        source: DraggableLocation::new(TODO, 0),
        destination: Some(DraggableLocation::new(DONE, 0)),
    });

    // When
    session.apply(command).await.unwrap();

    // Then
    assert_eq!(task_ids(&session.snapshot().await, DONE), vec!["task-1"]);
}

#[tokio::test]
async fn given_cancelled_drag_when_drag_end_then_board_unchanged() {
    let session = session();
    let before = session.snapshot().await;

    let outcome = session
        .drag_end(DragResult {
            draggable_id: task("task-1"),
            source: DraggableLocation::new(TODO, 0),
            destination: None,
        })
        .await
        .unwrap();

    assert_eq!(outcome, DragOutcome::Cancelled);
    assert_eq!(session.snapshot().await, before);
}

#[tokio::test]
async fn given_title_over_limit_when_add_column_then_validation_error() {
    // Given
    let session = BoardSession::new(
        Board::demo(),
        BoardLimits {
            max_title_length: 5,
            ..BoardLimits::default()
        },
    );

    // When
    let result = session
        .apply(
            BoardOperation::AddColumn {
                title: "Much too long".to_string(),
            }
            .into(),
        )
        .await;

    // Then
    assert!(matches!(result, Err(CoreError::Validation { .. })));
    assert_eq!(session.snapshot().await.column_order().len(), 3);
}

#[tokio::test]
async fn given_column_limit_reached_when_add_column_then_validation_error() {
    let session = BoardSession::new(
        Board::demo(),
        BoardLimits {
            max_columns: 3,
            ..BoardLimits::default()
        },
    );

    let result = session
        .apply(
            BoardOperation::AddColumn {
                title: "Fourth".to_string(),
            }
            .into(),
        )
        .await;

    assert!(result.unwrap_err().is_rejected_gesture());
}

#[tokio::test]
async fn given_column_limit_reached_when_add_blank_column_then_no_op_not_error() {
    // Given
    let session = BoardSession::new(
        Board::demo(),
        BoardLimits {
            max_columns: 3,
            ..BoardLimits::default()
        },
    );
    let before = session.snapshot().await;

    // When
    let result = session
        .apply(
            BoardOperation::AddColumn {
                title: "   ".to_string(),
            }
            .into(),
        )
        .await;

    // Then
    assert_eq!(result.unwrap(), before);
    assert_eq!(session.snapshot().await, before);
}

#[tokio::test]
async fn given_concurrent_moves_when_applied_then_serialized_and_one_rejected() {
    // Given: two views both believe task-1 is at index 0
    let session = session();
    let first = session.clone();
    let second = session.clone();
    let move_to = |dest: &str| -> BoardCommand {
        BoardOperation::MoveTask(MoveRequest {
            task_id: task("task-1"),
            source_column: column(TODO),
            source_index: 0,
            dest_column: column(dest),
            dest_index: 0,
        })
        .into()
    };
    let to_done = move_to(DONE);
    let to_progress = move_to(crate::tests::IN_PROGRESS);

    // When
    let (a, b) = tokio::join!(first.apply(to_done), second.apply(to_progress));

    // Then
    assert!(a.is_ok() ^ b.is_ok());
    let board = session.snapshot().await;
    assert!(board.validate().is_ok());
    assert_eq!(board.tasks().len(), 4);
}

#[test]
fn given_operation_json_when_parsed_then_operation_command() {
    let json = r#"{ "op": "rename_column", "column_id": "column-1", "title": "Backlog" }"#;

    let command: BoardCommand = serde_json::from_str(json).unwrap();

    assert_eq!(
        command,
        BoardCommand::Operation(BoardOperation::RenameColumn {
            column_id: column(TODO),
            title: "Backlog".to_string(),
        })
    );
    assert_eq!(command.name(), "rename_column");
}

#[test]
fn given_move_operation_json_when_parsed_then_move_request() {
    let json = r#"{
        "op": "move_task",
        "task_id": "task-2",
        "source_column": "column-1",
        "source_index": 1,
        "dest_column": "column-3",
        "dest_index": 0
    }"#;

    let command: BoardCommand = serde_json::from_str(json).unwrap();

    let BoardCommand::Operation(BoardOperation::MoveTask(request)) = command else {
        panic!("expected a move");
    };
    assert_eq!(request.source_index, 1);
    assert_eq!(request.dest_column, column(DONE));
}
