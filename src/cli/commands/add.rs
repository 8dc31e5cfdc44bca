//! `todoctl add` command.

use crate::domain::date_parser;
use crate::domain::priority::Priority;
use crate::error::TodoError;
use crate::storage::repository::TaskStore;
use chrono::NaiveDate;

pub fn run(
    store: &TaskStore,
    today: NaiveDate,
    title: String,
    priority: &str,
    due: Option<String>,
) -> Result<String, TodoError> {
    let priority = Priority::from_str_loose(priority)?;
    let deadline = due
        .as_deref()
        .map(|d| date_parser::parse_due(d, today))
        .transpose()?;

    let task = store.create(title, priority, deadline)?;
    Ok(format!("Created task #{}: {}", task.id, task.title))
}
