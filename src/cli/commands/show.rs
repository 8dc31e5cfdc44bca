//! `todoctl show` command.

use crate::cli::output::{self, OutputFormat};
use crate::config::Config;
use crate::error::TodoError;
use crate::storage::repository::TaskStore;
use chrono::NaiveDate;

pub fn run(
    store: &TaskStore,
    config: &Config,
    today: NaiveDate,
    id: u32,
    format: OutputFormat,
) -> Result<String, TodoError> {
    let task = store.get(id)?.ok_or(TodoError::TaskNotFound(id))?;
    Ok(output::format_task_detail(&task, today, config, format))
}
