//! Recommendation engine: rank "ready" tasks into a bounded list.
//!
//! A task is ready when it is not complete and every id in its direct
//! dependency edge set belongs to a complete task. Only direct
//! dependencies are checked, never the transitive closure: a task
//! blocked by a two-link chain becomes eligible as soon as its
//! immediate dependency completes.

use super::graph::DependencyGraph;
use crate::domain::{Task, TaskId, TaskStatus};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Rank ready tasks and truncate to `max_count`.
///
/// Sort order: priority descending, then parsable due date ascending;
/// entries without a parsable date sort after all dated entries and
/// tie-break among themselves by ascending id. The sort is stable, so
/// ties beyond the documented keys keep candidate order. Always
/// returns a (possibly empty) list; `max_count == 0` yields no
/// recommendations.
#[must_use]
pub fn recommend(tasks: &[Task], graph: &DependencyGraph, max_count: usize) -> Vec<Task> {
    let completed: HashSet<TaskId> = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Complete)
        .map(|t| t.id)
        .collect();

    let mut candidates: Vec<Task> = tasks
        .iter()
        .filter(|t| t.status != TaskStatus::Complete)
        .filter(|t| match graph.get(&t.id) {
            Some(deps) => deps.iter().all(|dep| completed.contains(dep)),
            None => true,
        })
        .cloned()
        .collect();

    candidates.sort_by(compare_candidates);
    candidates.truncate(max_count);
    candidates
}

/// Ranking comparator: priority descending, dated-before-undated,
/// dates ascending, undated ties by ascending id.
fn compare_candidates(a: &Task, b: &Task) -> Ordering {
    b.priority.cmp(&a.priority).then_with(|| {
        match (a.parsed_due_date(), b.parsed_due_date()) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.id.cmp(&b.id),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph;
    use crate::domain::TaskId;
    use rstest::rstest;

    fn task(id: i64, title: &str, priority: u8, due: &str, status: TaskStatus) -> Task {
        Task {
            id: TaskId::new(id),
            title: title.to_string(),
            priority,
            due_date: due.to_string(),
            status,
            ..Task::default()
        }
    }

    #[test]
    fn complete_tasks_are_never_recommended() {
        let tasks = vec![
            task(1, "Done", 5, "2024-01-01", TaskStatus::Complete),
            task(2, "Open", 1, "", TaskStatus::Pending),
        ];
        let graph = graph::build(&tasks);

        let recs = recommend(&tasks, &graph, 10);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id, TaskId::new(2));
    }

    #[test]
    fn blocked_task_is_excluded_until_dependency_completes() {
        let mut tasks = vec![
            task(1, "Design", 3, "2024-01-10", TaskStatus::Pending),
            task(2, "Build", 2, "2024-01-05", TaskStatus::Pending),
        ];
        tasks[1].description = "depends on Design".to_string();

        let g = graph::build(&tasks);
        assert_eq!(g[&TaskId::new(2)], [TaskId::new(1)].into());

        let recs = recommend(&tasks, &g, 5);
        let ids: Vec<TaskId> = recs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId::new(1)]);

        // Mark the dependency complete, rebuild, recompute
        tasks[0].status = TaskStatus::Complete;
        let g = graph::build(&tasks);
        let recs = recommend(&tasks, &g, 5);
        let ids: Vec<TaskId> = recs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId::new(2)]);
    }

    #[test]
    fn one_hop_only_chain_head_becomes_eligible_early() {
        // C depends on B depends on A; with B complete, C is ready
        // even though A is still pending. Direct dependencies only.
        let mut tasks = vec![
            task(1, "Alpha", 1, "", TaskStatus::Pending),
            task(2, "Bravo", 1, "", TaskStatus::Complete),
            task(3, "Charlie", 1, "", TaskStatus::Pending),
        ];
        tasks[1].description = "needs Alpha".to_string();
        tasks[2].description = "needs Bravo".to_string();

        let g = graph::build(&tasks);
        let recs = recommend(&tasks, &g, 10);
        let ids: Vec<TaskId> = recs.iter().map(|t| t.id).collect();
        assert!(ids.contains(&TaskId::new(3)));
    }

    #[test]
    fn sorted_by_priority_then_due_date() {
        let tasks = vec![
            task(1, "Low early", 1, "2024-01-01", TaskStatus::Pending),
            task(2, "High late", 4, "2024-06-01", TaskStatus::Pending),
            task(3, "High early", 4, "2024-01-15", TaskStatus::Pending),
        ];
        let g = graph::build(&tasks);

        let recs = recommend(&tasks, &g, 10);
        let ids: Vec<TaskId> = recs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId::new(3), TaskId::new(2), TaskId::new(1)]);
    }

    #[test]
    fn undated_entries_sort_after_dated_then_by_id() {
        let tasks = vec![
            task(5, "No date B", 2, "", TaskStatus::Pending),
            task(3, "No date A", 2, "not-a-date", TaskStatus::Pending),
            task(9, "Dated", 2, "2030-12-31", TaskStatus::Pending),
        ];
        let g = graph::build(&tasks);

        let recs = recommend(&tasks, &g, 10);
        let ids: Vec<TaskId> = recs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId::new(9), TaskId::new(3), TaskId::new(5)]);
    }

    #[rstest]
    #[case::zero(0, 0)]
    #[case::one(1, 1)]
    #[case::over_count(10, 3)]
    fn truncates_to_max_count(#[case] max: usize, #[case] expected: usize) {
        let tasks = vec![
            task(1, "A", 1, "", TaskStatus::Pending),
            task(2, "B", 2, "", TaskStatus::Pending),
            task(3, "C", 3, "", TaskStatus::Pending),
        ];
        let g = graph::build(&tasks);

        assert_eq!(recommend(&tasks, &g, max).len(), expected);
    }

    #[test]
    fn empty_task_set_yields_empty_list() {
        let tasks: Vec<Task> = Vec::new();
        let g = graph::build(&tasks);
        assert!(recommend(&tasks, &g, 5).is_empty());
    }

    #[test]
    fn output_sorted_for_mixed_sets() {
        // Priorities descend, then dates ascend, undated last.
        let tasks = vec![
            task(1, "P5 undated", 5, "", TaskStatus::Pending),
            task(2, "P5 dated", 5, "2024-02-02", TaskStatus::Pending),
            task(3, "P2", 2, "2024-01-01", TaskStatus::Pending),
            task(4, "P4", 4, "", TaskStatus::Pending),
        ];
        let g = graph::build(&tasks);

        let recs = recommend(&tasks, &g, 10);
        let priorities: Vec<u8> = recs.iter().map(|t| t.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(priorities, sorted);
        assert_eq!(recs[0].id, TaskId::new(2)); // dated before undated at P5
    }
}
