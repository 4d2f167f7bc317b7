use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the configured seed board
    Seed,

    /// Apply a script of gestures to a board and print the result
    Replay {
        /// JSON-lines file, one command per line
        script: PathBuf,

        /// Start from this board file instead of the seed board
        #[arg(long)]
        board: Option<PathBuf>,
    },

    /// Validate a board file
    Check {
        /// Board JSON file
        file: PathBuf,
    },
}
