use crate::script::ScriptLine;

use kb_core::{Board, BoardLimits, BoardSession};
use log::{info, warn};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub board: Board,
    pub applied: usize,
    /// Line numbers of commands the board rejected
    pub rejected: Vec<usize>,
}

/// Apply every script line in order against one session.
///
/// A rejected command is logged and skipped; it never stops the replay.
pub async fn replay(board: Board, limits: BoardLimits, script: Vec<ScriptLine>) -> ReplayReport {
    let session = BoardSession::new(board, limits);
    let mut applied = 0;
    let mut rejected = Vec::new();

    for ScriptLine { line, command } in script {
        let name = command.name();
        match session.apply(command).await {
            Ok(_) => applied += 1,
            Err(e) => {
                warn!("Line {line}: {name} ignored: {e}");
                rejected.push(line);
            }
        }
    }

    info!(
        "Replay finished: {} applied, {} rejected {:?}",
        applied,
        rejected.len(),
        rejected
    );

    ReplayReport {
        board: session.snapshot().await,
        applied,
        rejected,
    }
}
