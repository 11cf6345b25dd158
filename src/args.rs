//! Command-line arguments for the planner binary.

use clap::Parser;
use std::path::PathBuf;

/// Prints a placement audit of the stored pottery studio plan
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (JSON or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Plan file to use instead of the configured one
    #[arg(short, long)]
    pub plan: Option<PathBuf>,

    /// Discard the stored plan and start from the starter studio
    #[arg(long)]
    pub reset: bool,

    /// Write the plan back to the plan file after the report
    #[arg(long)]
    pub save: bool,
}
