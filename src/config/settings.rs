//! Configuration file loading and default values.

use crate::domain::deadline::DEFAULT_DUE_SOON_DAYS;
use crate::error::TodoError;
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "todoctl";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub deadlines: DeadlineConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    pub date_format: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeadlineConfig {
    /// Look-ahead window for "due soon", in days.
    pub due_soon_days: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub directory: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl Default for DeadlineConfig {
    fn default() -> Self {
        Self {
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        let dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join(APP_DIR);
        Self {
            directory: dir.to_string_lossy().into_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with the resolution order:
    /// CLI args > env vars > config file > defaults.
    pub fn load(config_path: Option<&Path>, data_dir: Option<&str>) -> Result<Self, TodoError> {
        let path = config_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("TODOCTL_CONFIG").ok().map(PathBuf::from))
            .unwrap_or_else(default_config_path);

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| TodoError::ConfigError(format!("{}: {e}", path.display())))?;
            toml::from_str::<Config>(&content)
                .map_err(|e| TodoError::ConfigError(format!("{}: {e}", path.display())))?
        } else {
            Config::default()
        };

        if let Some(dir) = data_dir {
            config.data.directory = dir.to_string();
        } else if let Ok(dir) = std::env::var("TODOCTL_DATA_DIR") {
            config.data.directory = dir;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject a `date_format` chrono cannot render.
    fn validate(&self) -> Result<(), TodoError> {
        let format = &self.display.date_format;
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(TodoError::ConfigError(format!(
                "invalid display.date_format: {format}"
            )));
        }
        Ok(())
    }

    /// Resolve the data directory path, expanding `~`.
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.data.directory)
    }

    pub fn default_toml() -> String {
        format!(
            r#"[display]
color = true
date_format = "%Y-%m-%d"

[deadlines]
due_soon_days = {DEFAULT_DUE_SOON_DAYS}

[data]
directory = "~/.local/share/{APP_DIR}"

[logging]
level = "warn"
"#
        )
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(APP_DIR)
        .join("config.toml")
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert!(cfg.display.color);
        assert_eq!(cfg.display.date_format, "%Y-%m-%d");
        assert_eq!(cfg.deadlines.due_soon_days, 7);
        assert_eq!(cfg.logging.level, "warn");
    }

    #[test]
    fn default_toml_parses_to_defaults() {
        let cfg: Config = toml::from_str(&Config::default_toml()).unwrap();
        assert_eq!(cfg.deadlines.due_soon_days, DEFAULT_DUE_SOON_DAYS);
        assert_eq!(cfg.logging.level, "warn");
        assert_eq!(cfg.data.directory, "~/.local/share/todoctl");
    }

    #[test]
    fn parse_partial_toml() {
        let cfg: Config = toml::from_str("[deadlines]\ndue_soon_days = 3\n").unwrap();
        assert_eq!(cfg.deadlines.due_soon_days, 3);
        assert!(cfg.display.color);
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[display]
color = false
date_format = "%d/%m"

[deadlines]
due_soon_days = 14

[data]
directory = "/tmp/tasks"

[logging]
level = "debug"
"#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert!(!cfg.display.color);
        assert_eq!(cfg.display.date_format, "%d/%m");
        assert_eq!(cfg.deadlines.due_soon_days, 14);
        assert_eq!(cfg.data.directory, "/tmp/tasks");
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn negative_window_is_rejected() {
        assert!(toml::from_str::<Config>("[deadlines]\ndue_soon_days = -1\n").is_err());
    }

    #[test]
    fn load_nonexistent_config_returns_default() {
        let cfg = Config::load(Some(Path::new("/nonexistent/config.toml")), None).unwrap();
        assert_eq!(cfg.deadlines.due_soon_days, 7);
    }

    #[test]
    fn load_invalid_config_is_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display\ncolor = ").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn load_rejects_bad_date_format() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\ndate_format = \"%Y-%\"\n").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn data_dir_override() {
        let cfg = Config::load(Some(Path::new("/nonexistent/config.toml")), Some("/tmp/my-tasks"))
            .unwrap();
        assert_eq!(cfg.data.directory, "/tmp/my-tasks");
        assert_eq!(cfg.data_dir(), PathBuf::from("/tmp/my-tasks"));
    }

    #[test]
    fn expand_tilde_works() {
        let result = expand_tilde("~/test");
        assert!(!result.to_string_lossy().starts_with("~/"));
    }

    #[test]
    fn expand_absolute_path() {
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
    }
}
