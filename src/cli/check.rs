//! `tov check` command implementation

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use crate::clock::TimeSession;
use crate::overdue::{self, OverdueClassification};

#[derive(Args)]
pub struct CheckArgs {
    /// Due date to classify; omitted or unparseable means no due date
    #[arg(long)]
    due: Option<String>,

    /// Treat the task as completed
    #[arg(long)]
    done: bool,

    /// Evaluate as of this date (YYYY-MM-DD) instead of resolving the time
    #[arg(long, value_name = "DATE")]
    today: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct CheckJson {
    today: NaiveDate,
    #[serde(flatten)]
    status: OverdueClassification,
    offers_archive: bool,
}

fn describe(status: &OverdueClassification) -> String {
    let indicator = status.indicator();
    if !indicator.is_visible() {
        return "Not overdue".to_string();
    }
    if status.offers_archive() {
        format!("{} (consider archiving)", indicator)
    } else {
        indicator.to_string()
    }
}

pub async fn run(args: CheckArgs, session: &TimeSession) -> Result<()> {
    let today = super::resolve_today(args.today.as_deref(), session).await?;
    let status = overdue::classify(args.due.as_deref(), args.done, today);

    if args.json {
        let out = CheckJson {
            today,
            status,
            offers_archive: status.offers_archive(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", describe(&status));
    }

    Ok(())
}
