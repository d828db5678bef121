//! Task data model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::overdue::{self, OverdueClassification};

/// Task ID in format T001, T002, etc.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

impl TaskId {
    /// Parse task ID from string
    pub fn parse(s: &str) -> Option<Self> {
        if s.starts_with('T') && s.len() == 4 && s[1..].chars().all(|c| c.is_ascii_digit()) {
            Some(Self(s.to_string()))
        } else {
            None
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task as read from the task store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: Option<TaskId>,

    pub title: String,

    #[serde(default)]
    pub completed: bool,

    /// Due date exactly as written; may be malformed
    #[serde(default)]
    pub due: Option<String>,

    #[serde(default)]
    pub project: Option<String>,
}

impl Task {
    /// Classify against a calendar day
    pub fn classify_on(&self, today: NaiveDate) -> OverdueClassification {
        overdue::classify(self.due.as_deref(), self.completed, today)
    }
}
