//! Error types for todoctl.

use thiserror::Error;

/// All error types that can occur in todoctl.
#[derive(Error, Debug)]
pub enum TodoError {
    // Input errors (exit code: 1)
    /// The requested task was not found.
    #[error("Task #{0} does not exist")]
    TaskNotFound(u32),

    /// An invalid argument was provided.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A title that is empty after trimming.
    #[error("Task title cannot be empty")]
    EmptyTitle,

    /// A deadline that none of the accepted date forms match.
    #[error("Cannot parse date: {0}")]
    InvalidDate(String),

    // Data errors (exit code: 2)
    /// Failed to parse a task, metadata or export file.
    #[error("Failed to parse file: {path}")]
    ParseError {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    // Lock errors (exit code: 3)
    /// Failed to acquire the lock file.
    #[error("Failed to acquire lock file")]
    LockError(#[source] std::io::Error),

    // Config errors (exit code: 4)
    /// Failed to read or parse the configuration file.
    #[error("Failed to read configuration: {0}")]
    ConfigError(String),

    // IO errors
    /// A generic I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TodoError {
    /// Returns the process exit code for this error category.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TaskNotFound(_)
            | Self::InvalidArgument(_)
            | Self::EmptyTitle
            | Self::InvalidDate(_) => 1,

            Self::ParseError { .. } => 2,

            Self::LockError(_) => 3,

            Self::ConfigError(_) => 4,

            Self::Io(_) => 1,
        }
    }
}
