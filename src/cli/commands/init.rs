//! `todoctl init` command.

use crate::config::{self, Config};
use crate::error::TodoError;
use std::path::Path;

pub fn run(config_path: Option<&Path>, force: bool) -> Result<String, TodoError> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config::default_config_path);

    if path.exists() && !force {
        return Err(TodoError::ConfigError(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, Config::default_toml())?;

    Ok(format!("Created configuration file: {}", path.display()))
}
