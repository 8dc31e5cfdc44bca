//! `todoctl done` and `todoctl undone` commands. Both are idempotent.

use crate::error::TodoError;
use crate::storage::repository::TaskStore;

pub fn run_done(store: &TaskStore, id: u32) -> Result<String, TodoError> {
    if !store.mark_complete(id)? {
        return Err(TodoError::TaskNotFound(id));
    }
    Ok(format!("Completed task #{id}"))
}

pub fn run_undone(store: &TaskStore, id: u32) -> Result<String, TodoError> {
    if !store.mark_incomplete(id)? {
        return Err(TodoError::TaskNotFound(id));
    }
    Ok(format!("Reopened task #{id}"))
}
