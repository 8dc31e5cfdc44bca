//! Completion and priority filtering.

use crate::domain::priority::Priority;
use crate::domain::task::Task;

/// Conjunctive filter criteria. `None` leaves that field unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.completed.map_or(true, |c| task.completed == c)
            && self.priority.map_or(true, |p| task.priority == p)
    }
}

/// Keep the tasks matching `filter`, preserving input order.
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u32, priority: Priority, completed: bool) -> Task {
        let mut t = Task::new(id, format!("Task {id}"), priority, None);
        t.completed = completed;
        t
    }

    fn sample() -> Vec<Task> {
        vec![
            task(1, Priority::High, false),
            task(2, Priority::Low, true),
            task(3, Priority::High, true),
            task(4, Priority::Medium, false),
            task(5, Priority::High, false),
        ]
    }

    fn ids(tasks: &[Task]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn no_criteria_keeps_everything() {
        let tasks = sample();
        assert_eq!(filter_tasks(&tasks, &TaskFilter::default()), tasks);
    }

    #[test]
    fn by_completed() {
        let tasks = sample();
        let done = TaskFilter {
            completed: Some(true),
            ..Default::default()
        };
        let open = TaskFilter {
            completed: Some(false),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &done)), vec![2, 3]);
        assert_eq!(ids(&filter_tasks(&tasks, &open)), vec![1, 4, 5]);
        assert_eq!(
            filter_tasks(&tasks, &done).len() + filter_tasks(&tasks, &open).len(),
            tasks.len()
        );
    }

    #[test]
    fn by_priority() {
        let tasks = sample();
        let high = TaskFilter {
            priority: Some(Priority::High),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &high)), vec![1, 3, 5]);
    }

    #[test]
    fn criteria_are_conjunctive() {
        let tasks = sample();
        let f = TaskFilter {
            completed: Some(false),
            priority: Some(Priority::High),
        };
        assert_eq!(ids(&filter_tasks(&tasks, &f)), vec![1, 5]);
    }

    #[test]
    fn idempotent() {
        let tasks = sample();
        let f = TaskFilter {
            priority: Some(Priority::High),
            ..Default::default()
        };
        let once = filter_tasks(&tasks, &f);
        assert_eq!(filter_tasks(&once, &f), once);
    }

    #[test]
    fn empty_and_no_match() {
        let f = TaskFilter {
            priority: Some(Priority::Medium),
            completed: Some(true),
        };
        assert!(filter_tasks(&[], &f).is_empty());
        assert!(filter_tasks(&sample(), &f).is_empty());
    }
}
