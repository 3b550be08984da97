use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "docfacts",
    version,
    about = "Check CUDA and PyTorch facts in the project documentation"
)]
pub(crate) struct Cli {
    /// Defaults to `check` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Print per-check diagnostics to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Directory holding README.md and docs/
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Run every check in order, or a single named check
    Check {
        /// Check name (see `docfacts list`)
        name: Option<String>,
    },

    /// List checks in run order
    List,

    /// Generate shell completions
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
