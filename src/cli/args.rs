//! Command-line argument definitions using clap derive.

use crate::storage::transfer::DEFAULT_TRANSFER_FILE;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "todoctl",
    version,
    about = "A to-do list with priorities, deadlines and statistics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// One summary line per task.
    #[arg(long, global = true, conflicts_with = "json")]
    pub brief: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override data directory path.
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Override config file path.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Evaluate deadlines as of this date (YYYY-MM-DD) instead of today.
    #[arg(long, global = true)]
    pub today: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a default configuration file.
    Init {
        /// Overwrite existing config file.
        #[arg(long)]
        force: bool,
    },

    /// Create a new task.
    Add {
        /// Task title.
        title: String,

        /// Priority (1-3 or low/medium/high).
        #[arg(long, short, default_value = "low")]
        priority: String,

        /// Deadline (YYYY-MM-DD, DD-MM-YYYY, today, tomorrow, +3d, +1w, monday..sunday).
        #[arg(long)]
        due: Option<String>,
    },

    /// Show task details.
    Show {
        /// Task ID.
        id: u32,
    },

    /// List tasks.
    List {
        /// Only completed tasks.
        #[arg(long, conflicts_with = "pending")]
        completed: bool,

        /// Only pending tasks.
        #[arg(long)]
        pending: bool,

        /// Only tasks with this priority.
        #[arg(long, short)]
        priority: Option<String>,

        /// Sort by priority, title or deadline.
        #[arg(long, short)]
        sort: Option<String>,

        /// Reverse the sort order.
        #[arg(long, short)]
        reverse: bool,
    },

    /// Edit a task.
    Edit {
        /// Task ID.
        id: u32,

        /// New title.
        #[arg(long)]
        title: Option<String>,

        /// New priority.
        #[arg(long, short)]
        priority: Option<String>,

        /// New deadline (empty to remove).
        #[arg(long)]
        due: Option<String>,
    },

    /// Mark a task as completed.
    Done {
        /// Task ID.
        id: u32,
    },

    /// Mark a task as not completed.
    Undone {
        /// Task ID.
        id: u32,
    },

    /// Delete a task.
    Delete {
        /// Task ID.
        id: u32,

        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },

    /// Delete all tasks.
    Clear {
        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },

    /// Search tasks by title.
    Search {
        /// Search query (case-insensitive).
        query: String,
    },

    /// List incomplete tasks past their deadline.
    Overdue,

    /// List incomplete tasks due within the next few days.
    Due {
        /// Window size in days (default from config).
        #[arg(long, short)]
        days: Option<u32>,
    },

    /// Show task statistics.
    Stats,

    /// Export all tasks to a JSON file.
    Export {
        /// Output file.
        #[arg(default_value = DEFAULT_TRANSFER_FILE)]
        path: String,
    },

    /// Import tasks from a JSON file.
    Import {
        /// Input file.
        #[arg(default_value = DEFAULT_TRANSFER_FILE)]
        path: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell type (bash, zsh, fish).
        shell: String,
    },
}
