//! Stable single-key task sorting.

use crate::domain::task::Task;
use crate::error::TodoError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Fields a task list can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Priority,
    Title,
    Deadline,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Priority => write!(f, "priority"),
            Self::Title => write!(f, "title"),
            Self::Deadline => write!(f, "deadline"),
        }
    }
}

impl FromStr for SortKey {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "title" => Ok(Self::Title),
            "deadline" | "due" => Ok(Self::Deadline),
            _ => Err(TodoError::InvalidArgument(format!(
                "Unknown sort key: {s} (expected priority, title or deadline)"
            ))),
        }
    }
}

impl SortKey {
    /// Natural ascending order for this key. A missing or malformed deadline
    /// compares below every real date.
    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::Priority => a.priority.cmp(&b.priority),
            Self::Title => a.title.cmp(&b.title),
            Self::Deadline => a.deadline_date().cmp(&b.deadline_date()),
        }
    }
}

/// Return a sorted copy of `tasks`. Equal keys keep their input order in
/// both directions.
pub fn sort_tasks(tasks: &[Task], key: SortKey, reverse: bool) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    if reverse {
        sorted.sort_by(|a, b| key.compare(b, a));
    } else {
        sorted.sort_by(|a, b| key.compare(a, b));
    }
    sorted
}
