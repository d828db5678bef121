//! Text indicators for overdue tasks
//!
//! Every overdue state carries a text label so it never depends on color alone.

use serde::Serialize;
use std::fmt;

use super::OverdueClassification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "level", content = "days")]
pub enum Indicator {
    /// Nothing to show
    None,
    /// Past due
    Overdue(u32),
    /// Past due by at least [`super::SEVERE_AFTER_DAYS`]
    Severe(u32),
}

impl Indicator {
    /// Short label for table cells, empty when there is nothing to show
    pub fn label(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Overdue(days) => format!("overdue {}d", days),
            Self::Severe(days) => format!("OVERDUE {}d !", days),
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl From<OverdueClassification> for Indicator {
    fn from(c: OverdueClassification) -> Self {
        match c.days_overdue() {
            Some(days) if c.is_severe() => Self::Severe(days),
            Some(days) => Self::Overdue(days),
            None => Self::None,
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Overdue(1) => write!(f, "Overdue by 1 day"),
            Self::Overdue(days) => write!(f, "Overdue by {} days", days),
            Self::Severe(days) => write!(f, "Severely overdue by {} days", days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_from_classification() {
        assert_eq!(
            Indicator::from(OverdueClassification::not_overdue()),
            Indicator::None
        );
        assert_eq!(
            Indicator::from(OverdueClassification::overdue_by(3)),
            Indicator::Overdue(3)
        );
        assert_eq!(
            Indicator::from(OverdueClassification::overdue_by(30)),
            Indicator::Severe(30)
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Indicator::None.label(), "");
        assert_eq!(Indicator::Overdue(2).label(), "overdue 2d");
        assert_eq!(Indicator::Severe(45).label(), "OVERDUE 45d !");
        assert!(!Indicator::None.is_visible());
        assert!(Indicator::Overdue(1).is_visible());
    }

    #[test]
    fn test_display() {
        assert_eq!(Indicator::Overdue(1).to_string(), "Overdue by 1 day");
        assert_eq!(Indicator::Overdue(5).to_string(), "Overdue by 5 days");
        assert_eq!(
            Indicator::Severe(59).to_string(),
            "Severely overdue by 59 days"
        );
        assert_eq!(Indicator::None.to_string(), "");
    }
}
