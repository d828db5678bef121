//! Task store adapter
//!
//! Reads tasks from a TASKS.md file:
//! - `## Section` headers group tasks
//! - `- [ ]` / `- [x]` lines carry completion, optional id, project and due date
//! - Due dates are kept as written so malformed values reach classification

pub mod model;
pub mod parser;

pub use model::{Task, TaskId};
pub use parser::{TaskSection, TasksFile};
