//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use super::check::CheckArgs;
use super::list::ListArgs;
use super::now::NowArgs;

#[derive(Parser)]
#[command(name = "tov")]
#[command(about = "Overdue status and severity for personal task lists")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub time: TimeArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags controlling how the session's "now" is obtained
#[derive(Args, Debug, Clone, Default)]
pub struct TimeArgs {
    /// Time authority URL, overriding the configured one
    #[arg(long, global = true, value_name = "URL")]
    pub authority: Option<String>,

    /// Use the local clock without contacting a time authority
    #[arg(long, global = true, conflicts_with = "authority")]
    pub offline: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks with their overdue status
    #[command(alias = "ls")]
    List(ListArgs),

    /// Classify a single due date
    Check(CheckArgs),

    /// Show the session time and where it came from
    Now(NowArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
