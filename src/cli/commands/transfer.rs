//! `todoctl export` and `todoctl import` commands.

use crate::error::TodoError;
use crate::storage::repository::TaskStore;
use crate::storage::transfer;
use log::info;
use std::collections::HashSet;
use std::path::Path;

pub fn run_export(store: &TaskStore, path: &str) -> Result<String, TodoError> {
    let tasks = store.list_all()?;
    let count = transfer::export_tasks(&tasks, Path::new(path))?;
    info!("exported {count} tasks to {path}");
    Ok(format!("Exported {count} task(s) to {path}"))
}

/// Imported tasks get new ids; their completion state is carried over.
/// Records whose title already exists in the store are skipped.
pub fn run_import(store: &TaskStore, path: &str) -> Result<String, TodoError> {
    let imported = transfer::import_tasks(Path::new(path))?;
    let existing: HashSet<String> = store.list_all()?.into_iter().map(|t| t.title).collect();

    let fresh: Vec<_> = imported
        .into_iter()
        .filter(|item| !existing.contains(&item.title))
        .collect();
    if fresh.is_empty() {
        return Ok(format!("No new tasks to import from {path}"));
    }

    for item in &fresh {
        let task = store.create(item.title.clone(), item.priority, item.deadline)?;
        if item.completed {
            store.mark_complete(task.id)?;
        }
    }

    info!("imported {} new tasks from {path}", fresh.len());
    Ok(format!("Imported {} new task(s) from {path}", fresh.len()))
}
