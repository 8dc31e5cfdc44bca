//! `todoctl overdue` and `todoctl due` commands.

use crate::cli::output::{self, OutputFormat};
use crate::config::Config;
use crate::domain::deadline;
use crate::error::TodoError;
use crate::storage::repository::TaskStore;
use chrono::NaiveDate;

pub fn run_overdue(
    store: &TaskStore,
    config: &Config,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TodoError> {
    let tasks = deadline::overdue_tasks(&store.list_all()?, today);
    Ok(output::format_task_list(&tasks, today, config, format))
}

pub fn run_due(
    store: &TaskStore,
    config: &Config,
    today: NaiveDate,
    days: Option<u32>,
    format: OutputFormat,
) -> Result<String, TodoError> {
    let days = days.unwrap_or(config.deadlines.due_soon_days);
    let tasks = deadline::due_soon_tasks(&store.list_all()?, today, days);
    Ok(output::format_task_list(&tasks, today, config, format))
}
