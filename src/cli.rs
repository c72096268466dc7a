use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

mod run_impl;

pub use run_impl::run_with_args;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "format-all",
    version,
    about = "Run a style-driven formatter over every C/C++ file in a tree",
    long_about = None
)]
pub struct Args {
    /// Directory to scan
    #[arg(value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub dir: PathBuf,

    /// Formatter executable, invoked as `<PROGRAM> -style=file -i <file>` (default: clang-format)
    #[arg(long = "formatter", value_name = "PROGRAM", value_hint = ValueHint::CommandName)]
    pub formatter: Option<PathBuf>,

    /// Accepted for compatibility; has no effect
    #[arg(long = "root", value_name = "PATH")]
    pub root: Option<String>,

    /// Only scan the top level of DIR
    #[arg(long = "no-recurse", action = ArgAction::SetTrue)]
    pub no_recurse: bool,

    /// Follow symlinked directories while scanning
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue)]
    pub follow_symlinks: bool,

    /// Print the files that would be formatted and exit
    #[arg(long = "list", action = ArgAction::SetTrue, conflicts_with = "progress")]
    pub list: bool,

    /// Show a progress bar
    #[arg(long = "progress", action = ArgAction::SetTrue)]
    pub progress: bool,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if the scan root cannot be resolved.
pub fn run() -> Result<()> {
    let args = Args::parse();
    run_with_args(&args)
}
