//! `todoctl clear` command.

use crate::error::TodoError;
use crate::storage::repository::TaskStore;

pub fn run(store: &TaskStore, force: bool) -> Result<String, TodoError> {
    let count = store.list_all()?.len();
    if count == 0 {
        return Ok("No tasks to delete.".to_string());
    }

    if !force && !super::confirm(&format!("Delete all {count} task(s)?"))? {
        return Ok("Cancelled.".to_string());
    }

    let removed = store.clear_all()?;
    Ok(format!("Deleted {removed} task(s)"))
}
