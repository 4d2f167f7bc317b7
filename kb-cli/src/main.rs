//! kb - kanban board engine CLI
//!
//! # Examples
//!
//! ```bash
//! # Print the demo board
//! kb seed --pretty
//!
//! # Replay recorded gestures against the demo board; prints the final
//! # board with the applied count and rejected line numbers
//! kb replay gestures.jsonl --pretty
//!
//! # Validate a saved board
//! kb check board.json
//! ```

use kb_cli::board_file::{BoardSummary, read_board, read_board_data, seed_board, to_json};
use kb_cli::cli::Cli;
use kb_cli::commands::Commands;
use kb_cli::replay::replay;
use kb_cli::script::read_script;
use kb_cli::{CliErrorResult, logger};

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<String> {
    let config = kb_config::Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting kb v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    match cli.command {
        Commands::Seed => to_json(&seed_board(config.board.seed), cli.pretty),

        Commands::Replay { script, board } => {
            let start = match board {
                Some(ref path) => read_board(path)?,
                None => seed_board(config.board.seed),
            };
            let lines = read_script(&script)?;
            info!("Replaying {} command(s) from {}", lines.len(), script.display());

            let report = replay(start, config.board.limits(), lines).await;
            to_json(&report, cli.pretty)
        }

        Commands::Check { file } => {
            let data = read_board_data(&file)?;
            to_json(&BoardSummary::of(data), cli.pretty)
        }
    }
}
