//! `todoctl stats` command.

use crate::cli::output::{self, OutputFormat};
use crate::domain::stats;
use crate::error::TodoError;
use crate::storage::repository::TaskStore;
use chrono::NaiveDate;

pub fn run(store: &TaskStore, today: NaiveDate, format: OutputFormat) -> Result<String, TodoError> {
    let summary = stats::task_stats(&store.list_all()?, today);
    Ok(output::format_stats(&summary, format))
}
