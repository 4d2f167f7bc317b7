//! Replay scripts: one JSON command per line.
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::error::{CliError, Result as CliErrorResult};

use std::path::Path;

use kb_core::BoardCommand;

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    /// 1-based line number in the source file
    pub line: usize,
    pub command: BoardCommand,
}

pub fn parse_script(source: &str) -> CliErrorResult<Vec<ScriptLine>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, text)| {
            let text = text.trim();
            !text.is_empty() && !text.starts_with('#')
        })
        .map(|(index, text)| {
            serde_json::from_str(text)
                .map(|command| ScriptLine {
                    line: index + 1,
                    command,
                })
                .map_err(|source| CliError::Script {
                    line: index + 1,
                    source,
                })
        })
        .collect()
}

pub fn read_script(path: &Path) -> CliErrorResult<Vec<ScriptLine>> {
    let source = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    parse_script(&source)
}
