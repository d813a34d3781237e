//! CLI argument parsing for marginalia
//!
//! Global flags: --root, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod commands;
pub mod format;
pub mod output;
pub mod paths;

use clap::Parser;
use std::path::PathBuf;

pub use args::{DraftArgs, EditArgs, InitArgs, ListArgs, PreviewArgs, PublishArgs};
pub use commands::Commands;
pub use output::OutputFormat;

/// Marginalia - turn article highlights into static-site posts
#[derive(Parser, Debug)]
#[command(name = "marginalia")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root holding marginalia.toml and the draft/post directories
    #[arg(long, global = true, env = "MARGINALIA_ROOT")]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
