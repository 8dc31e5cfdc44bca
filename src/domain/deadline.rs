//! Deadline windows: overdue and due-soon classification relative to `today`.
//!
//! Tasks without a deadline, or whose deadline does not parse, fall in
//! neither window. Completed tasks are never overdue or due soon.

use crate::domain::task::Task;
use chrono::{Duration, NaiveDate};

/// Default look-ahead for [`due_soon_tasks`].
pub const DEFAULT_DUE_SOON_DAYS: u32 = 7;

/// Where an open task's deadline sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineState {
    Overdue,
    DueSoon,
    Later,
    NoDeadline,
}

/// Deadline strictly before `today` on an incomplete task.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    !task.completed && task.deadline_date().is_some_and(|d| d < today)
}

/// Deadline within `today..=today + days` on an incomplete task.
pub fn is_due_soon(task: &Task, today: NaiveDate, days: u32) -> bool {
    if task.completed {
        return false;
    }
    let Some(deadline) = task.deadline_date() else {
        return false;
    };
    let cutoff = today
        .checked_add_signed(Duration::days(i64::from(days)))
        .unwrap_or(NaiveDate::MAX);
    today <= deadline && deadline <= cutoff
}

pub fn overdue_tasks(tasks: &[Task], today: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| is_overdue(t, today))
        .cloned()
        .collect()
}

pub fn due_soon_tasks(tasks: &[Task], today: NaiveDate, days: u32) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| is_due_soon(t, today, days))
        .cloned()
        .collect()
}

/// Classify a task for display. Completed tasks and tasks without a valid
/// deadline are `NoDeadline`.
pub fn classify(task: &Task, today: NaiveDate, days: u32) -> DeadlineState {
    if task.completed || task.deadline_date().is_none() {
        DeadlineState::NoDeadline
    } else if is_overdue(task, today) {
        DeadlineState::Overdue
    } else if is_due_soon(task, today, days) {
        DeadlineState::DueSoon
    } else {
        DeadlineState::Later
    }
}
