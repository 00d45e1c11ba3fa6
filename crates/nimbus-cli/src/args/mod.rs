mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "nimbus")]
#[command(about = "Readable listings, size conversion and command history for cloud clients", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace directory holding config.toml and the history file
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Disable ANSI styling
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}
