use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "kb")]
#[command(about = "Kanban board engine: replay board gestures and inspect boards")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
