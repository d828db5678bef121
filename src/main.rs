//! tov - Overdue status for personal task lists

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use task_overdue::cli::{self, Cli, Commands};
use task_overdue::config::Config;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = if std::env::var("TASK_OVERDUE_DEBUG").is_ok() {
        EnvFilter::new("task_overdue=debug")
    } else if let Ok(filter) = EnvFilter::try_from_default_env() {
        filter
    } else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    if let Commands::Completion { shell } = cli.command {
        generate(shell, &mut Cli::command(), "tov", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let session = cli::time_session(&cli.time, &config);

    match cli.command {
        Commands::List(args) => cli::list::run(args, &config, &session).await,
        Commands::Check(args) => cli::check::run(args, &session).await,
        Commands::Now(args) => cli::now::run(args, &session).await,
        Commands::Completion { .. } => unreachable!(),
    }
}
