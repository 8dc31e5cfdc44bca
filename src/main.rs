mod cli;
mod config;
mod domain;
mod error;
mod logging;
mod storage;

use crate::cli::args::{Cli, Command};
use crate::cli::output::OutputFormat;
use crate::config::Config;
use crate::domain::task::parse_deadline;
use crate::error::TodoError;
use crate::storage::repository::TaskStore;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if let TodoError::LockError(_) = e {
                eprintln!(
                    "Hint: If the problem persists, manually delete the .lock file in your data directory."
                );
            }
            process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<String, TodoError> {
    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var("TODOCTL_CONFIG").ok());

    // Handle init and completions before loading config/store
    match &cli.command {
        Command::Init { force } => {
            return cli::commands::init::run(config_path.as_deref().map(Path::new), *force)
        }
        Command::Completions { shell } => return cli::commands::completions::run(shell),
        _ => {}
    }

    let config = Config::load(
        config_path.as_deref().map(Path::new),
        cli.data_dir.as_deref(),
    )?;
    let _logger = logging::init_logging(&config.logging.level)?;

    let today = resolve_today(cli.today.as_deref())?;
    let format = OutputFormat::from_flags(cli.json, cli.brief, cli.no_color, &config);
    let store = TaskStore::open(config.data_dir());
    log::debug!(
        "data dir {}, today {today}",
        store.data_dir().display()
    );

    match cli.command {
        Command::Init { .. } | Command::Completions { .. } => unreachable!(),

        Command::Add {
            title,
            priority,
            due,
        } => cli::commands::add::run(&store, today, title, &priority, due),

        Command::Show { id } => cli::commands::show::run(&store, &config, today, id, format),

        Command::List {
            completed,
            pending,
            priority,
            sort,
            reverse,
        } => {
            let completed = match (completed, pending) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            cli::commands::list::run(
                &store, &config, today, completed, priority, sort, reverse, format,
            )
        }

        Command::Edit {
            id,
            title,
            priority,
            due,
        } => cli::commands::edit::run(&store, today, id, title, priority, due),

        Command::Done { id } => cli::commands::status::run_done(&store, id),
        Command::Undone { id } => cli::commands::status::run_undone(&store, id),

        Command::Delete { id, force } => cli::commands::delete::run(&store, id, force),
        Command::Clear { force } => cli::commands::clear::run(&store, force),

        Command::Search { query } => {
            cli::commands::search::run(&store, &config, today, &query, format)
        }

        Command::Overdue => cli::commands::deadlines::run_overdue(&store, &config, today, format),
        Command::Due { days } => {
            cli::commands::deadlines::run_due(&store, &config, today, days, format)
        }

        Command::Stats => cli::commands::stats::run(&store, today, format),

        Command::Export { path } => cli::commands::transfer::run_export(&store, &path),
        Command::Import { path } => cli::commands::transfer::run_import(&store, &path),
    }
}

/// The one place the real clock is read.
fn resolve_today(flag: Option<&str>) -> Result<NaiveDate, TodoError> {
    match flag {
        Some(s) => parse_deadline(s.trim()).ok_or_else(|| {
            TodoError::InvalidArgument(format!("--today must be YYYY-MM-DD (got {s})"))
        }),
        None => Ok(Local::now().date_naive()),
    }
}
