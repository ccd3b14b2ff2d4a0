//! Dependency graph builder.
//!
//! Derives a one-level "depends-on" relation per task from textual
//! containment: task T depends on task C when C's title appears inside
//! T's description or title. This is a heuristic O(n^2) text scan with
//! no semantic parsing; the resulting adjacency mapping is thrown away
//! and rebuilt on every recommendation pass.

use crate::domain::{Task, TaskId};
use std::collections::{HashMap, HashSet};

/// Inferred dependency edges: task id -> ids it depends on.
///
/// Derived, never persisted, and not guaranteed acyclic.
pub type DependencyGraph = HashMap<TaskId, HashSet<TaskId>>;

/// Build the dependency graph from the current task set.
///
/// Title matching is case-insensitive. Duplicate lower-cased titles
/// resolve to whichever task is processed last (last-write-wins).
/// Self-edges are excluded; a task with no qualifying matches gets an
/// empty edge set.
#[must_use]
pub fn build(tasks: &[Task]) -> DependencyGraph {
    let mut title_to_id: HashMap<String, TaskId> = HashMap::new();
    for task in tasks {
        title_to_id.insert(task.title.to_lowercase(), task.id);
    }

    let mut graph = DependencyGraph::new();
    for task in tasks {
        let description = task.description.to_lowercase();
        let title = task.title.to_lowercase();

        let mut deps = HashSet::new();
        for (other_title, &other_id) in &title_to_id {
            if other_id == task.id || other_title.is_empty() {
                continue;
            }
            if description.contains(other_title) || title.contains(other_title) {
                deps.insert(other_id);
            }
        }
        graph.insert(task.id, deps);
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;

    fn task(id: i64, title: &str, description: &str) -> Task {
        Task {
            id: TaskId::new(id),
            title: title.to_string(),
            description: description.to_string(),
            ..Task::default()
        }
    }

    #[test]
    fn description_mention_creates_edge() {
        let tasks = vec![
            task(1, "Design", ""),
            task(2, "Build", "depends on Design"),
        ];
        let graph = build(&tasks);

        assert_eq!(graph[&TaskId::new(2)], HashSet::from([TaskId::new(1)]));
        assert!(graph[&TaskId::new(1)].is_empty());
    }

    #[test]
    fn title_containment_creates_edge() {
        let tasks = vec![task(1, "Deploy", ""), task(2, "Deploy staging", "")];
        let graph = build(&tasks);

        // "deploy staging" contains "deploy"
        assert_eq!(graph[&TaskId::new(2)], HashSet::from([TaskId::new(1)]));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let tasks = vec![
            task(1, "Schema Review", ""),
            task(2, "Migrate", "blocked until SCHEMA REVIEW lands"),
        ];
        let graph = build(&tasks);

        assert!(graph[&TaskId::new(2)].contains(&TaskId::new(1)));
    }

    #[test]
    fn no_self_edges_even_when_title_mentions_itself() {
        let tasks = vec![task(1, "Review", "Review everything twice")];
        let graph = build(&tasks);

        assert!(graph[&TaskId::new(1)].is_empty());
    }

    #[test]
    fn duplicate_titles_resolve_to_last_task() {
        let tasks = vec![
            task(1, "Setup", ""),
            task(2, "Setup", ""),
            task(3, "Teardown", "after Setup"),
        ];
        let graph = build(&tasks);

        // Last-write-wins in the title lookup
        assert_eq!(graph[&TaskId::new(3)], HashSet::from([TaskId::new(2)]));
    }

    #[test]
    fn unrelated_tasks_get_empty_edge_sets() {
        let tasks = vec![task(1, "Alpha", "nothing here"), task(2, "Beta", "")];
        let graph = build(&tasks);

        assert!(graph[&TaskId::new(1)].is_empty());
        assert!(graph[&TaskId::new(2)].is_empty());
    }

    #[test]
    fn mutual_mentions_may_form_a_cycle() {
        // The graph is not guaranteed acyclic; both edges exist.
        let tasks = vec![
            task(1, "Ship", "after Test"),
            task(2, "Test", "before Ship"),
        ];
        let graph = build(&tasks);

        assert!(graph[&TaskId::new(1)].contains(&TaskId::new(2)));
        assert!(graph[&TaskId::new(2)].contains(&TaskId::new(1)));
    }
}
