//! `tov now` command implementation

use anyhow::Result;
use clap::Args;

use crate::clock::TimeSession;

#[derive(Args)]
pub struct NowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: NowArgs, session: &TimeSession) -> Result<()> {
    let resolved = session.now().await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    println!("Now:    {}", resolved.value().to_rfc3339());
    println!("Today:  {}", resolved.today());
    println!("Origin: {}", resolved.origin());
    if let Some(url) = session.resolver().authority() {
        println!("Authority: {}", url);
    }

    Ok(())
}
