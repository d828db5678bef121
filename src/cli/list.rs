//! `tov list` command implementation

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::clock::TimeSession;
use crate::config::Config;
use crate::overdue::{Indicator, OverdueClassification};
use crate::task::{Task, TasksFile};

const TABLE_COL_ID: usize = 6;
const TABLE_COL_TITLE: usize = 36;
const TABLE_COL_DUE: usize = 12;

#[derive(Args)]
pub struct ListArgs {
    /// Path to TASKS.md (defaults to the configured file, then ./TASKS.md)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Show overdue tasks only
    #[arg(long)]
    overdue: bool,

    /// Show severely overdue tasks only
    #[arg(long, conflicts_with = "overdue")]
    severe: bool,

    /// Evaluate as of this date (YYYY-MM-DD) instead of resolving the time
    #[arg(long, value_name = "DATE")]
    today: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TaskJson<'a> {
    id: Option<String>,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<&'a str>,
    completed: bool,
    due: Option<&'a str>,
    #[serde(flatten)]
    status: OverdueClassification,
    offers_archive: bool,
}

#[derive(Serialize)]
struct ListJson<'a> {
    today: NaiveDate,
    tasks: Vec<TaskJson<'a>>,
}

fn tasks_path(file: Option<PathBuf>, config: &Config) -> PathBuf {
    file.or_else(|| config.tasks.file_path())
        .unwrap_or_else(|| PathBuf::from("TASKS.md"))
}

/// Keep the rows the filter flags ask for
fn filter_rows<'a>(
    rows: Vec<(&'a Task, OverdueClassification)>,
    overdue: bool,
    severe: bool,
) -> Vec<(&'a Task, OverdueClassification)> {
    rows.into_iter()
        .filter(|(_, c)| {
            if severe {
                c.is_severe()
            } else if overdue {
                c.is_overdue()
            } else {
                true
            }
        })
        .collect()
}

fn print_table_header() {
    println!(
        "{:<width_id$} {:<width_title$} {:<width_due$} STATUS",
        "ID",
        "TITLE",
        "DUE",
        width_id = TABLE_COL_ID,
        width_title = TABLE_COL_TITLE,
        width_due = TABLE_COL_DUE,
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_ID + TABLE_COL_TITLE + TABLE_COL_DUE + 20)
    );
}

fn status_cell(task: &Task, indicator: Indicator) -> String {
    if task.completed {
        "done".to_string()
    } else if indicator.is_visible() {
        indicator.label()
    } else {
        String::new()
    }
}

fn print_table_row(task: &Task, classification: OverdueClassification) {
    let id = task
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let title = super::truncate(&task.title, TABLE_COL_TITLE);
    let due = super::truncate(task.due.as_deref().unwrap_or("-"), TABLE_COL_DUE);
    println!(
        "{:<width_id$} {:<width_title$} {:<width_due$} {}",
        id,
        title,
        due,
        status_cell(task, classification.indicator()),
        width_id = TABLE_COL_ID,
        width_title = TABLE_COL_TITLE,
        width_due = TABLE_COL_DUE,
    );
}

/// Line offering to archive severely overdue tasks, if there are any
fn archive_hint(rows: &[(&Task, OverdueClassification)]) -> Option<String> {
    let count = rows.iter().filter(|(_, c)| c.offers_archive()).count();
    match count {
        0 => None,
        1 => Some(format!(
            "1 task is overdue by {}+ days. Consider archiving it.",
            crate::overdue::SEVERE_AFTER_DAYS
        )),
        n => Some(format!(
            "{} tasks are overdue by {}+ days. Consider archiving them.",
            n,
            crate::overdue::SEVERE_AFTER_DAYS
        )),
    }
}

pub async fn run(args: ListArgs, config: &Config, session: &TimeSession) -> Result<()> {
    let path = tasks_path(args.file, config);
    if !path.exists() {
        bail!("No TASKS.md found at {}", path.display());
    }

    let file = TasksFile::from_file(&path)?;
    let today = super::resolve_today(args.today.as_deref(), session).await?;
    let rows = filter_rows(file.classified(today), args.overdue, args.severe);

    if args.json {
        let tasks = rows
            .iter()
            .map(|(task, status)| TaskJson {
                id: task.id.as_ref().map(|id| id.to_string()),
                title: &task.title,
                project: task.project.as_deref(),
                completed: task.completed,
                due: task.due.as_deref(),
                status: *status,
                offers_archive: status.offers_archive(),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&ListJson { today, tasks })?
        );
        return Ok(());
    }

    if rows.is_empty() {
        println!("No tasks found");
        return Ok(());
    }

    println!("Tasks as of {} ({}):\n", today, rows.len());
    print_table_header();
    for (task, classification) in &rows {
        print_table_row(task, *classification);
    }

    if let Some(hint) = archive_hint(&rows) {
        println!("\n{}", hint);
    }

    Ok(())
}
