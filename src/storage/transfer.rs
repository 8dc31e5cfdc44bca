//! JSON export/import. Deadlines are written as `DD-MM-YYYY` in the file
//! and converted back to the canonical form on import.

use crate::domain::date_parser;
use crate::domain::priority::Priority;
use crate::domain::task::{validate_title, Task};
use crate::error::TodoError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default export/import file name.
pub const DEFAULT_TRANSFER_FILE: &str = "tasks.json";

#[derive(Debug, Serialize, Deserialize)]
struct TaskRecord {
    #[serde(default)]
    id: Option<u32>,
    title: String,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    deadline: Option<String>,
}

/// A task read from an export file, ready to be recreated in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedTask {
    pub title: String,
    pub priority: Priority,
    pub completed: bool,
    pub deadline: Option<NaiveDate>,
}

pub fn export_tasks(tasks: &[Task], path: &Path) -> Result<usize, TodoError> {
    let records: Vec<TaskRecord> = tasks
        .iter()
        .map(|t| TaskRecord {
            id: Some(t.id),
            title: t.title.clone(),
            priority: t.priority,
            completed: t.completed,
            deadline: t.deadline.as_ref().map(|raw| {
                date_parser::canonical_to_display(raw).unwrap_or_else(|| raw.clone())
            }),
        })
        .collect();

    let json = serde_json::to_string_pretty(&records).map_err(|e| parse_error(path, e))?;
    std::fs::write(path, json)?;
    Ok(records.len())
}

/// Read and validate an export file. Fails without returning anything if
/// any title is empty. A deadline that is not a valid `DD-MM-YYYY` date is
/// dropped; ids in the file are ignored.
pub fn import_tasks(path: &Path) -> Result<Vec<ImportedTask>, TodoError> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<TaskRecord> =
        serde_json::from_str(&content).map_err(|e| parse_error(path, e))?;

    records
        .into_iter()
        .map(|r| -> Result<ImportedTask, TodoError> {
            Ok(ImportedTask {
                title: validate_title(r.title)?,
                priority: r.priority,
                completed: r.completed,
                deadline: r.deadline.as_deref().and_then(date_parser::parse_display),
            })
        })
        .collect()
}

fn parse_error(path: &Path, e: serde_json::Error) -> TodoError {
    TodoError::ParseError {
        path: path.to_string_lossy().into_owned(),
        source: anyhow::Error::new(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn task(id: u32, title: &str, deadline: Option<&str>, completed: bool) -> Task {
        let mut t = Task::new(id, title.to_string(), Priority::Medium, None);
        t.deadline = deadline.map(str::to_string);
        t.completed = completed;
        t
    }

    #[test]
    fn export_writes_display_dates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_TRANSFER_FILE);
        let tasks = vec![
            task(1, "Dated", Some("2024-07-04"), false),
            task(2, "Undated", None, true),
            task(3, "Broken", Some("July"), false),
        ];
        assert_eq!(export_tasks(&tasks, &path).unwrap(), 3);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items[0]["deadline"], "04-07-2024");
        assert_eq!(items[0]["priority"], 2);
        assert_eq!(items[0]["id"], 1);
        assert!(items[1]["deadline"].is_null());
        assert_eq!(items[1]["completed"], true);
        // Unrecognized deadlines are passed through verbatim.
        assert_eq!(items[2]["deadline"], "July");
    }

    #[test]
    fn import_converts_back_to_canonical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 8, "title": "Dated", "priority": 3, "completed": false, "deadline": "31-12-2024"},
                {"title": "Bad date", "priority": 1, "deadline": "2024-12-31"},
                {"title": "Done", "completed": true, "deadline": null}
            ]"#,
        )
        .unwrap();

        let imported = import_tasks(&path).unwrap();
        assert_eq!(imported.len(), 3);
        assert_eq!(imported[0].priority, Priority::High);
        assert_eq!(imported[0].deadline, NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(imported[1].deadline, None);
        assert_eq!(imported[2].priority, Priority::Low);
        assert!(imported[2].completed);
    }

    #[test]
    fn import_trims_titles() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.json");
        std::fs::write(&path, r#"[{"title": "  Padded  "}]"#).unwrap();
        assert_eq!(import_tasks(&path).unwrap()[0].title, "Padded");
    }

    #[test]
    fn import_rejects_empty_title_anywhere() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.json");
        std::fs::write(&path, r#"[{"title": "Keep"}, {"title": "  "}]"#).unwrap();
        assert!(matches!(import_tasks(&path), Err(TodoError::EmptyTitle)));
    }

    #[test]
    fn import_rejects_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(import_tasks(&path).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn import_rejects_out_of_range_priority() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"[{"title": "X", "priority": 9}]"#).unwrap();
        assert!(import_tasks(&path).is_err());
    }

    #[test]
    fn import_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = import_tasks(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, TodoError::Io(_)));
    }
}
