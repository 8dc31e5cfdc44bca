//! Task record and field updates.

use crate::domain::priority::Priority;
use crate::error::TodoError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical storage format for deadlines. Lexicographic and chronological
/// order coincide.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub deadline: Option<String>,
}

/// A single field change applied by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskChange {
    Title(String),
    Priority(Priority),
    Deadline(Option<NaiveDate>),
    Completed(bool),
}

impl Task {
    /// Create a new, incomplete task.
    pub fn new(id: u32, title: String, priority: Priority, deadline: Option<NaiveDate>) -> Self {
        Self {
            id,
            title,
            priority,
            completed: false,
            deadline: deadline.map(format_deadline),
        }
    }

    /// The deadline as a date, or `None` when absent or malformed.
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        self.deadline.as_deref().and_then(parse_deadline)
    }

    pub fn apply(&mut self, change: TaskChange) -> Result<(), TodoError> {
        match change {
            TaskChange::Title(title) => self.title = validate_title(title)?,
            TaskChange::Priority(priority) => self.priority = priority,
            TaskChange::Deadline(deadline) => self.deadline = deadline.map(format_deadline),
            TaskChange::Completed(completed) => self.completed = completed,
        }
        Ok(())
    }
}

/// Trim a title and reject it if nothing is left.
pub fn validate_title(title: String) -> Result<String, TodoError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TodoError::EmptyTitle);
    }
    if trimmed.len() == title.len() {
        Ok(title)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Strict `YYYY-MM-DD` parse.
pub fn parse_deadline(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DEADLINE_FORMAT).ok()
}

pub fn format_deadline(date: NaiveDate) -> String {
    date.format(DEADLINE_FORMAT).to_string()
}
