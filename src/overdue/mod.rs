//! Overdue classification for tasks
//!
//! Classification is derived on every read from a task's due date, its
//! completion flag and the session's calendar day. It is never stored on the
//! task and never cached by task id, so it cannot drift from `today`.

pub mod indicator;
pub mod normalize;

pub use indicator::Indicator;
pub use normalize::{day_of, parse_due_date};

use chrono::NaiveDate;
use serde::Serialize;

/// Days overdue at which a task counts as severely overdue (inclusive).
pub const SEVERE_AFTER_DAYS: u32 = 30;

/// Result of classifying one task against a calendar day.
///
/// Fields are private: `is_severe` implies `is_overdue`, and `days_overdue`
/// is present exactly when `is_overdue` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct OverdueClassification {
    is_overdue: bool,
    is_severe: bool,
    days_overdue: Option<u32>,
}

impl OverdueClassification {
    /// Classification for tasks that are complete, undated or not yet due.
    pub const fn not_overdue() -> Self {
        Self {
            is_overdue: false,
            is_severe: false,
            days_overdue: None,
        }
    }

    /// Classification for a task `days` past its due date.
    ///
    /// Zero days is not overdue.
    pub const fn overdue_by(days: u32) -> Self {
        if days == 0 {
            return Self::not_overdue();
        }
        Self {
            is_overdue: true,
            is_severe: days >= SEVERE_AFTER_DAYS,
            days_overdue: Some(days),
        }
    }

    pub fn is_overdue(&self) -> bool {
        self.is_overdue
    }

    pub fn is_severe(&self) -> bool {
        self.is_severe
    }

    pub fn days_overdue(&self) -> Option<u32> {
        self.days_overdue
    }

    /// Whether the rendering layer may offer to archive the task.
    ///
    /// This is only a gate; nothing here archives anything.
    pub fn offers_archive(&self) -> bool {
        self.is_severe
    }

    pub fn indicator(&self) -> Indicator {
        Indicator::from(*self)
    }
}

/// Classify a task from its raw due date.
///
/// Missing, blank and unparseable due dates all classify as "no due date".
pub fn classify(due: Option<&str>, completed: bool, today: NaiveDate) -> OverdueClassification {
    if completed {
        return OverdueClassification::not_overdue();
    }
    classify_date(due.and_then(parse_due_date), completed, today)
}

/// Classify a task whose due date has already been parsed.
pub fn classify_date(
    due: Option<NaiveDate>,
    completed: bool,
    today: NaiveDate,
) -> OverdueClassification {
    if completed {
        return OverdueClassification::not_overdue();
    }

    let Some(due) = due else {
        return OverdueClassification::not_overdue();
    };

    // Due today or later is never overdue.
    if due >= today {
        return OverdueClassification::not_overdue();
    }

    let days = normalize::whole_days_between(today, due);
    OverdueClassification::overdue_by(u32::try_from(days).unwrap_or(u32::MAX))
}
