//! `todoctl search` command.

use crate::cli::output::{self, OutputFormat};
use crate::config::Config;
use crate::error::TodoError;
use crate::storage::repository::TaskStore;
use chrono::NaiveDate;

pub fn run(
    store: &TaskStore,
    config: &Config,
    today: NaiveDate,
    query: &str,
    format: OutputFormat,
) -> Result<String, TodoError> {
    let results = store.search(query)?;
    Ok(output::format_task_list(&results, today, config, format))
}
