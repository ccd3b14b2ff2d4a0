//! Due-date reminders: classify open tasks against a reference date.

use chrono::{Days, NaiveDate};

use crate::domain::{Task, TaskStatus};

/// How a task's due date relates to the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// The due date is strictly before the reference date.
    Overdue,
    /// The due date equals the reference date.
    DueToday,
    /// The due date is exactly one day after the reference date.
    DueTomorrow,
}

impl DueStatus {
    /// Human-readable label, used verbatim in CLI output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueToday => "due today",
            Self::DueTomorrow => "due tomorrow",
        }
    }
}

/// A task paired with its reminder classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub task: Task,
    pub status: DueStatus,
}

/// Classify one task against `today`.
///
/// Completed tasks and tasks with a missing or unparsable due date
/// never produce a reminder. Dates further than one day out don't
/// either; reminders only cover what needs attention now.
#[must_use]
pub fn classify(task: &Task, today: NaiveDate) -> Option<DueStatus> {
    if task.status == TaskStatus::Complete {
        return None;
    }
    let due = task.parsed_due_date()?;
    let tomorrow = today.checked_add_days(Days::new(1))?;
    if due < today {
        Some(DueStatus::Overdue)
    } else if due == today {
        Some(DueStatus::DueToday)
    } else if due == tomorrow {
        Some(DueStatus::DueTomorrow)
    } else {
        None
    }
}

/// All reminders for a task list, in row order.
#[must_use]
pub fn due_reminders(tasks: &[Task], today: NaiveDate) -> Vec<Reminder> {
    tasks
        .iter()
        .filter_map(|task| {
            classify(task, today).map(|status| Reminder {
                task: task.clone(),
                status,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;
    use rstest::rstest;

    fn task(due: &str, status: TaskStatus) -> Task {
        Task {
            id: TaskId::new(1),
            title: "t".to_string(),
            due_date: due.to_string(),
            status,
            ..Task::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[rstest]
    #[case("2025-06-14", Some(DueStatus::Overdue))]
    #[case("2020-01-01", Some(DueStatus::Overdue))]
    #[case("2025-06-15", Some(DueStatus::DueToday))]
    #[case("2025-06-16", Some(DueStatus::DueTomorrow))]
    #[case("2025-06-17", None)]
    #[case("", None)]
    #[case("someday", None)]
    fn classifies_open_tasks_by_date(
        #[case] due: &str,
        #[case] expected: Option<DueStatus>,
    ) {
        let t = task(due, TaskStatus::Pending);
        assert_eq!(classify(&t, today()), expected);
    }

    #[test]
    fn completed_tasks_never_remind() {
        let t = task("2025-06-14", TaskStatus::Complete);
        assert_eq!(classify(&t, today()), None);
    }

    #[test]
    fn in_progress_tasks_do_remind() {
        let t = task("2025-06-15", TaskStatus::InProgress);
        assert_eq!(classify(&t, today()), Some(DueStatus::DueToday));
    }

    #[test]
    fn due_reminders_preserves_row_order() {
        let tasks = vec![
            task("2025-06-16", TaskStatus::Pending),
            task("2025-06-20", TaskStatus::Pending),
            task("2025-06-14", TaskStatus::InProgress),
        ];
        let reminders = due_reminders(&tasks, today());
        assert_eq!(reminders.len(), 2);
        assert_eq!(reminders[0].status, DueStatus::DueTomorrow);
        assert_eq!(reminders[1].status, DueStatus::Overdue);
    }
}
