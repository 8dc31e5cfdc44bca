//! `todoctl delete` command.

use crate::error::TodoError;
use crate::storage::repository::TaskStore;

pub fn run(store: &TaskStore, id: u32, force: bool) -> Result<String, TodoError> {
    let task = store.get(id)?.ok_or(TodoError::TaskNotFound(id))?;

    if !force && !super::confirm(&format!("Delete task #{id} \"{}\"?", task.title))? {
        return Ok("Cancelled.".to_string());
    }

    if !store.delete(id)? {
        return Err(TodoError::TaskNotFound(id));
    }
    Ok(format!("Deleted task #{id}"))
}
