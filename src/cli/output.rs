//! Output formatting for tasks (color, plain, JSON).

use crate::config::Config;
use crate::domain::deadline::{self, DeadlineState};
use crate::domain::stats::TaskStats;
use crate::domain::task::Task;
use chrono::NaiveDate;
use colored::Colorize;
use std::io::IsTerminal;

const TITLE_WIDTH: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Color,
    Plain,
    /// One summary line per task.
    Brief,
    Json,
}

impl OutputFormat {
    pub fn from_flags(json: bool, brief: bool, no_color: bool, config: &Config) -> Self {
        if json {
            Self::Json
        } else if brief {
            Self::Brief
        } else if no_color
            || !config.display.color
            || std::env::var("NO_COLOR").is_ok()
            || !std::io::stdout().is_terminal()
        {
            Self::Plain
        } else {
            Self::Color
        }
    }
}

/// One summary line per task, in the order given.
pub fn format_tasks(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .map(|task| {
            format!(
                "Task {}: {} (Priority: {}) - {}",
                task.id,
                task.title,
                task.priority,
                completion_label(task)
            )
        })
        .collect()
}

/// Format a task list as a table, or a JSON array.
pub fn format_task_list(
    tasks: &[Task],
    today: NaiveDate,
    config: &Config,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => return format_task_list_json(tasks, today),
        OutputFormat::Brief => return format_tasks(tasks).join("\n"),
        OutputFormat::Color | OutputFormat::Plain => {}
    }
    if tasks.is_empty() {
        return "No tasks found. Use 'todoctl add' to create one.".to_string();
    }

    let window = config.deadlines.due_soon_days;
    let mut lines = Vec::with_capacity(tasks.len() + 1);
    lines.push(format!(
        "{:>4}  {:<9}  {:<6}  {:<TITLE_WIDTH$}  {}",
        "#", "Status", "Pri", "Title", "Deadline"
    ));

    for task in tasks {
        let state = deadline::classify(task, today, window);
        let status = if task.completed { "✓ done" } else { "○ pending" };
        let deadline_str = format_deadline_short(task, today, config);

        let line = format!(
            "{:>4}  {:<9}  {:<6}  {:<TITLE_WIDTH$}  {}",
            task.id,
            status,
            task.priority,
            truncate(&task.title, TITLE_WIDTH),
            deadline_str
        );

        if format == OutputFormat::Color {
            lines.push(colorize(line, task, state));
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}

fn format_task_list_json(tasks: &[Task], today: NaiveDate) -> String {
    let items: Vec<serde_json::Value> = tasks.iter().map(|t| task_json(t, today)).collect();
    serde_json::to_string_pretty(&items).unwrap_or_else(|_| "[]".to_string())
}

fn task_json(task: &Task, today: NaiveDate) -> serde_json::Value {
    serde_json::json!({
        "id": task.id,
        "title": task.title,
        "priority": task.priority,
        "completed": task.completed,
        "deadline": task.deadline,
        "overdue": deadline::is_overdue(task, today),
    })
}

/// Format task detail view.
pub fn format_task_detail(
    task: &Task,
    today: NaiveDate,
    config: &Config,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => {
            return serde_json::to_string_pretty(&task_json(task, today)).unwrap_or_default()
        }
        OutputFormat::Brief => return format_tasks(std::slice::from_ref(task)).join("\n"),
        OutputFormat::Color | OutputFormat::Plain => {}
    }

    let mut lines = Vec::new();
    let header = format!("Task #{}", task.id);
    if format == OutputFormat::Color {
        lines.push(header.bold().to_string());
        lines.push("━".repeat(40).dimmed().to_string());
    } else {
        lines.push(header);
        lines.push("━".repeat(40));
    }

    lines.push(format!("Title:      {}", task.title));
    lines.push(format!(
        "Priority:   {} ({})",
        task.priority,
        task.priority.level()
    ));
    lines.push(format!("Status:     {}", completion_label(task)));

    match (task.deadline_date(), task.deadline.as_deref()) {
        (Some(date), _) => {
            let shown = date.format(&config.display.date_format);
            let days = (date - today).num_days();
            let note = if task.completed {
                String::new()
            } else if days < 0 {
                " (overdue)".to_string()
            } else if days == 0 {
                " (today)".to_string()
            } else if days == 1 {
                " (tomorrow)".to_string()
            } else {
                format!(" ({days} days left)")
            };
            lines.push(format!("Deadline:   {shown}{note}"));
        }
        (None, Some(raw)) => lines.push(format!("Deadline:   {raw} (unrecognized)")),
        (None, None) => lines.push("Deadline:   none".to_string()),
    }

    lines.join("\n")
}

/// Format task statistics.
pub fn format_stats(stats: &TaskStats, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(stats).unwrap_or_default();
    }

    let overdue = format!("Overdue:          {}", stats.overdue);
    let overdue = if format == OutputFormat::Color && stats.overdue > 0 {
        overdue.red().to_string()
    } else {
        overdue
    };

    [
        format!("Total:            {}", stats.total),
        format!("Completed:        {}", stats.completed),
        format!("Pending:          {}", stats.pending),
        overdue,
        format!("Completion rate:  {:.1}%", stats.completion_rate),
    ]
    .join("\n")
}

fn completion_label(task: &Task) -> &'static str {
    if task.completed {
        "Done"
    } else {
        "Pending"
    }
}

fn colorize(line: String, task: &Task, state: DeadlineState) -> String {
    if task.completed {
        return line.dimmed().to_string();
    }
    match state {
        DeadlineState::Overdue => line.red().to_string(),
        DeadlineState::DueSoon => line.yellow().to_string(),
        DeadlineState::Later | DeadlineState::NoDeadline => line,
    }
}

fn format_deadline_short(task: &Task, today: NaiveDate, config: &Config) -> String {
    let Some(date) = task.deadline_date() else {
        return if task.deadline.is_some() {
            "?".to_string()
        } else {
            String::new()
        };
    };
    let days = (date - today).num_days();
    if task.completed || days > 1 {
        date.format(&config.display.date_format).to_string()
    } else if days < 0 {
        "overdue".to_string()
    } else if days == 0 {
        "today".to_string()
    } else {
        "tomorrow".to_string()
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let head: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{head}...")
}
