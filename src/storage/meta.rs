//! `.meta.json`: the id counter. Ids are handed out once and never reused.

use crate::error::TodoError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const META_FILE: &str = ".meta.json";

#[derive(Debug, Serialize, Deserialize)]
pub struct Meta {
    pub next_id: u32,
}

impl Default for Meta {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl Meta {
    pub fn load(data_dir: &Path) -> Result<Self, TodoError> {
        let path = meta_path(data_dir);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| parse_error(&path, e))
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), TodoError> {
        let path = meta_path(data_dir);
        let content = serde_json::to_string_pretty(self).map_err(|e| parse_error(&path, e))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    pub fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Move the counter past `id` if a task file with that id already exists
    /// (e.g. `.meta.json` was lost).
    pub fn observe(&mut self, id: u32) {
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }
}

fn meta_path(data_dir: &Path) -> PathBuf {
    data_dir.join(META_FILE)
}

fn parse_error(path: &Path, e: serde_json::Error) -> TodoError {
    TodoError::ParseError {
        path: path.to_string_lossy().into_owned(),
        source: anyhow::Error::new(e),
    }
}
