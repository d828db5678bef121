//! task-overdue library - Overdue status and severity tiers for personal task lists
//!
//! The session's "now" comes from [`clock`], resolved once per session with a
//! local-clock fallback. [`overdue`] classifies each task against that day.

pub mod cli;
pub mod clock;
pub mod config;
pub mod overdue;
pub mod task;
