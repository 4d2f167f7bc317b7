use crate::error::{CliError, Result as CliErrorResult};

use std::path::Path;

use kb_config::SeedKind;
use kb_core::{Board, BoardData};
use serde::Serialize;

/// Board a session starts from when no board file is given
pub fn seed_board(seed: SeedKind) -> Board {
    match seed {
        SeedKind::Demo => Board::demo(),
        SeedKind::Empty => Board::empty(),
    }
}

/// Read and validate a board JSON file.
pub fn read_board(path: &Path) -> CliErrorResult<Board> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let board = serde_json::from_str(&contents)?;
    Ok(board)
}

/// Read a board JSON file without checking the board invariants.
pub fn read_board_data(path: &Path) -> CliErrorResult<BoardData> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let data = serde_json::from_str(&contents)?;
    Ok(data)
}

#[derive(Debug, Serialize)]
pub struct BoardSummary {
    pub valid: bool,
    /// Why the board failed validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub columns: usize,
    pub tasks: usize,
    /// Column titles in columnOrder
    pub column_titles: Vec<String>,
}

impl BoardSummary {
    pub fn of(data: BoardData) -> Self {
        let columns = data.columns.len();
        let tasks = data.tasks.len();
        let column_titles = data
            .column_order
            .iter()
            .filter_map(|id| data.columns.get(id))
            .map(|c| c.title.clone())
            .collect();

        let error = Board::try_from(data).err().map(|e| e.to_string());

        Self {
            valid: error.is_none(),
            error,
            columns,
            tasks,
            column_titles,
        }
    }
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> CliErrorResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
