//! Summary statistics over a task collection.

use crate::domain::deadline;
use crate::domain::task::Task;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    /// Percentage of completed tasks, one decimal place. `0.0` for no tasks.
    pub completion_rate: f64,
}

pub fn task_stats(tasks: &[Task], today: NaiveDate) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let overdue = tasks
        .iter()
        .filter(|t| deadline::is_overdue(t, today))
        .count();

    TaskStats {
        total,
        completed,
        pending: total - completed,
        overdue,
        completion_rate: completion_rate(completed, total),
    }
}

fn completion_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_tenths(completed as f64 / total as f64 * 100.0)
}

/// Round a non-negative value to one decimal, ties to even.
fn round_tenths(value: f64) -> f64 {
    let scaled = value * 10.0;
    let floor = scaled.floor();
    if scaled - floor != 0.5 {
        return scaled.round() / 10.0;
    }
    // `value * 10.0` may have rounded onto the half; the fused residual keeps
    // the exact sign.
    let residual = value.mul_add(10.0, -(floor + 0.5));
    let tenths = if residual > 0.0 || (residual == 0.0 && floor % 2.0 != 0.0) {
        floor + 1.0
    } else {
        floor
    };
    tenths / 10.0
}
