//! `todoctl list` command.

use crate::cli::output::{self, OutputFormat};
use crate::config::Config;
use crate::domain::filter::{self, TaskFilter};
use crate::domain::priority::Priority;
use crate::domain::sort::{self, SortKey};
use crate::error::TodoError;
use crate::storage::repository::TaskStore;
use chrono::NaiveDate;

#[allow(clippy::too_many_arguments)]
pub fn run(
    store: &TaskStore,
    config: &Config,
    today: NaiveDate,
    completed: Option<bool>,
    priority: Option<String>,
    sort_key: Option<String>,
    reverse: bool,
    format: OutputFormat,
) -> Result<String, TodoError> {
    // Validate user input before touching the store
    let priority = priority
        .as_deref()
        .map(Priority::from_str_loose)
        .transpose()?;
    let sort_key = sort_key.as_deref().map(str::parse::<SortKey>).transpose()?;

    let all = store.list_all()?;
    let mut tasks = filter::filter_tasks(&all, &TaskFilter { completed, priority });

    match sort_key {
        Some(key) => tasks = sort::sort_tasks(&tasks, key, reverse),
        // Without a key, list in id order
        None if reverse => tasks.reverse(),
        None => {}
    }

    Ok(output::format_task_list(&tasks, today, config, format))
}
