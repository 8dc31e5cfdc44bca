//! Task persistence: one YAML file per task plus the id counter.
//!
//! Every method returns owned values detached from the files on disk.

use crate::domain::priority::Priority;
use crate::domain::task::{validate_title, Task, TaskChange};
use crate::error::TodoError;
use crate::storage::lock::StoreLock;
use crate::storage::meta::Meta;
use chrono::NaiveDate;
use log::{info, warn};
use std::path::{Path, PathBuf};

const TASK_EXTENSION: &str = "yaml";

pub struct TaskStore {
    data_dir: PathBuf,
}

impl TaskStore {
    pub fn open(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Ensure the data directory exists.
    pub fn ensure_dir(&self) -> Result<(), TodoError> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)?;
        }
        Ok(())
    }

    fn task_path(&self, id: u32) -> PathBuf {
        self.data_dir.join(format!("{id}.{TASK_EXTENSION}"))
    }

    /// Create a new, incomplete task with a freshly allocated id.
    pub fn create(
        &self,
        title: String,
        priority: Priority,
        deadline: Option<NaiveDate>,
    ) -> Result<Task, TodoError> {
        let title = validate_title(title)?;
        self.ensure_dir()?;
        let _lock = StoreLock::acquire(&self.data_dir)?;

        let mut meta = Meta::load(&self.data_dir)?;
        for path in self.task_files()? {
            if let Some(id) = id_from_path(&path) {
                meta.observe(id);
            }
        }
        let id = meta.allocate_id();

        let task = Task::new(id, title, priority, deadline);
        self.write_task(&task)?;
        meta.save(&self.data_dir)?;

        info!("created task #{} (priority {})", task.id, task.priority.level());
        Ok(task)
    }

    /// All readable tasks, ordered by id. Unreadable files are skipped.
    pub fn list_all(&self) -> Result<Vec<Task>, TodoError> {
        let mut tasks = Vec::new();
        for path in self.task_files()? {
            match read_task(&path) {
                Ok(task) => tasks.push(task),
                Err(e) => warn!("skipping {}: {e}", path.display()),
            }
        }
        tasks.sort_by_key(|t| t.id);
        Ok(tasks)
    }

    pub fn get(&self, id: u32) -> Result<Option<Task>, TodoError> {
        let path = self.task_path(id);
        if !path.exists() {
            return Ok(None);
        }
        read_task(&path).map(Some)
    }

    /// Apply `changes` in order. Returns `false` if the task does not exist.
    /// Nothing is written if any change is rejected.
    pub fn update(&self, id: u32, changes: Vec<TaskChange>) -> Result<bool, TodoError> {
        let path = self.task_path(id);
        if !self.data_dir.exists() {
            return Ok(false);
        }
        let _lock = StoreLock::acquire(&self.data_dir)?;
        if !path.exists() {
            return Ok(false);
        }

        let mut task = read_task(&path)?;
        let summary = format!("{changes:?}");
        for change in changes {
            task.apply(change)?;
        }
        self.write_task(&task)?;

        info!("updated task #{id}: {summary}");
        Ok(true)
    }

    pub fn mark_complete(&self, id: u32) -> Result<bool, TodoError> {
        self.update(id, vec![TaskChange::Completed(true)])
    }

    pub fn mark_incomplete(&self, id: u32) -> Result<bool, TodoError> {
        self.update(id, vec![TaskChange::Completed(false)])
    }

    pub fn delete(&self, id: u32) -> Result<bool, TodoError> {
        let path = self.task_path(id);
        if !self.data_dir.exists() {
            return Ok(false);
        }
        let _lock = StoreLock::acquire(&self.data_dir)?;
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(path)?;

        info!("deleted task #{id}");
        Ok(true)
    }

    /// Delete every task and return how many were removed. The id counter is
    /// kept, so ids stay unique across clears.
    pub fn clear_all(&self) -> Result<usize, TodoError> {
        if !self.data_dir.exists() {
            return Ok(0);
        }
        let _lock = StoreLock::acquire(&self.data_dir)?;

        let files = self.task_files()?;
        for path in &files {
            std::fs::remove_file(path)?;
        }

        info!("cleared {} tasks", files.len());
        Ok(files.len())
    }

    /// Tasks whose title contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Result<Vec<Task>, TodoError> {
        let needle = query.to_lowercase();
        let mut tasks = self.list_all()?;
        tasks.retain(|t| t.title.to_lowercase().contains(&needle));
        Ok(tasks)
    }

    fn write_task(&self, task: &Task) -> Result<(), TodoError> {
        let path = self.task_path(task.id);
        let content = serde_yaml::to_string(task).map_err(|e| TodoError::ParseError {
            path: path.to_string_lossy().into_owned(),
            source: anyhow::Error::new(e),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn task_files(&self) -> Result<Vec<PathBuf>, TodoError> {
        if !self.data_dir.exists() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == TASK_EXTENSION) {
                files.push(path);
            }
        }
        Ok(files)
    }
}

fn read_task(path: &Path) -> Result<Task, TodoError> {
    let content = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| TodoError::ParseError {
        path: path.to_string_lossy().into_owned(),
        source: anyhow::Error::new(e),
    })
}

fn id_from_path(path: &Path) -> Option<u32> {
    path.file_stem()?.to_str()?.parse().ok()
}
