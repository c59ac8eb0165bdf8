//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Daily changelog keeper.
///
/// Appends timestamped items to a human-editable changelog file and
/// reconstructs per-day, per-activity time reports from it.
#[derive(Debug, Parser)]
#[command(name = "dl", version, about, long_about = None)]
pub struct Cli {
    /// Path to the changelog file.
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Add a timestamped item to today's entry (the default mode).
    #[arg(short = 'a', long = "add")]
    pub add: bool,

    /// Print the per-day time report instead of modifying the file.
    #[arg(short = 'c', long = "report", conflicts_with = "add")]
    pub report: bool,

    /// Output the report as JSON.
    #[arg(long, requires = "report")]
    pub json: bool,

    /// Free-form text of the item to add.
    pub text: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}
