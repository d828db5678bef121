//! TASKS.md parser

use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::path::Path;

use super::model::{Task, TaskId};
use crate::overdue::OverdueClassification;

/// Represents a parsed TASKS.md file
#[derive(Debug, Clone, Default)]
pub struct TasksFile {
    /// All tasks organized by section
    pub sections: Vec<TaskSection>,
}

/// A section in TASKS.md (e.g., "Inbox", "Someday")
#[derive(Debug, Clone)]
pub struct TaskSection {
    /// Section title (without ##), empty for tasks above the first header
    pub title: String,

    /// Tasks in this section
    pub tasks: Vec<Task>,
}

impl TasksFile {
    /// Parse TASKS.md from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read TASKS.md from {:?}", path))?;
        Self::parse(&content)
    }

    /// Parse TASKS.md content
    pub fn parse(content: &str) -> Result<Self> {
        let mut sections = Vec::new();
        let mut current_section: Option<TaskSection> = None;

        // - [x] **T001**: Title `project` (due: 2026-02-15)
        // Everything after the checkbox except the title is optional. The due
        // value runs to the line's final `)` and is captured verbatim, valid or not.
        let task_re = Regex::new(
            r"^-\s+\[([ xX])\]\s+(?:\*\*(T\d{3})\*\*:\s+)?(.+?)(?:\s+`([^`]+)`)?(?:\s+\(due:\s*(.*)\))?$",
        )
        .context("Invalid task line pattern")?;

        for line in content.lines() {
            let line = line.trim();

            if let Some(title) = line.strip_prefix("## ") {
                if let Some(section) = current_section.take() {
                    sections.push(section);
                }

                current_section = Some(TaskSection {
                    title: title.trim().to_string(),
                    tasks: Vec::new(),
                });
                continue;
            }

            if let Some(caps) = task_re.captures(line) {
                let completed = !caps[1].trim().is_empty();
                let id = caps.get(2).and_then(|m| TaskId::parse(m.as_str()));
                let title = caps[3].trim().to_string();
                let project = caps.get(4).map(|m| m.as_str().to_string());
                let due = caps
                    .get(5)
                    .map(|m| m.as_str().trim().to_string())
                    .filter(|s| !s.is_empty());

                let task = Task {
                    id,
                    title,
                    completed,
                    due,
                    project,
                };

                current_section
                    .get_or_insert_with(|| TaskSection {
                        title: String::new(),
                        tasks: Vec::new(),
                    })
                    .tasks
                    .push(task);
            }
        }

        if let Some(section) = current_section {
            sections.push(section);
        }

        Ok(Self { sections })
    }

    /// Get all tasks
    pub fn all_tasks(&self) -> Vec<&Task> {
        self.sections.iter().flat_map(|s| &s.tasks).collect()
    }

    /// Every task paired with its classification for `today`
    pub fn classified(&self, today: NaiveDate) -> Vec<(&Task, OverdueClassification)> {
        self.all_tasks()
            .into_iter()
            .map(|t| (t, t.classify_on(today)))
            .collect()
    }

    /// Tasks that are overdue on `today`
    pub fn overdue(&self, today: NaiveDate) -> Vec<(&Task, OverdueClassification)> {
        self.classified(today)
            .into_iter()
            .filter(|(_, c)| c.is_overdue())
            .collect()
    }
}
