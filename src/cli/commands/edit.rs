//! `todoctl edit` command.

use crate::domain::date_parser;
use crate::domain::priority::Priority;
use crate::domain::task::TaskChange;
use crate::error::TodoError;
use crate::storage::repository::TaskStore;
use chrono::NaiveDate;

pub fn run(
    store: &TaskStore,
    today: NaiveDate,
    id: u32,
    title: Option<String>,
    priority: Option<String>,
    due: Option<String>,
) -> Result<String, TodoError> {
    let mut changes = Vec::new();

    if let Some(new_title) = title {
        changes.push(TaskChange::Title(new_title));
    }

    if let Some(ref p) = priority {
        changes.push(TaskChange::Priority(Priority::from_str_loose(p)?));
    }

    if let Some(ref due_str) = due {
        let deadline = if due_str.trim().is_empty() {
            None
        } else {
            Some(date_parser::parse_due(due_str, today)?)
        };
        changes.push(TaskChange::Deadline(deadline));
    }

    if changes.is_empty() {
        return Err(TodoError::InvalidArgument(
            "Nothing to change: pass --title, --priority or --due".to_string(),
        ));
    }

    if !store.update(id, changes)? {
        return Err(TodoError::TaskNotFound(id));
    }
    Ok(format!("Updated task #{id}"))
}
