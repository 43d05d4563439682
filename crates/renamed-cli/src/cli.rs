//! CLI argument parsing

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rnm")]
#[command(about = "Renamed: deprecated shims for renamed declarations", long_about = None)]
#[command(after_help = "Use 'rnm <command> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults to ./.renamed.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log synthesis decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Expand every (Renamed ...) form in a file
    #[command(visible_alias = "x")]
    Expand {
        /// File of (Renamed ...) S-expressions
        path: PathBuf,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Report diagnostics without printing shims
    #[command(visible_alias = "lint")]
    Check {
        /// File of (Renamed ...) S-expressions
        path: PathBuf,
    },

    /// Show how a legacy name literal is parsed
    ParseName {
        /// Old name, e.g. "oldFn(_:label:)"
        literal: String,
    },
}
