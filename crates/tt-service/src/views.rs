//! Derived views over the entity store.
//!
//! Every view is a pure function of its inputs (store snapshot, session,
//! `now`) and recomputes on each call, so a view can never disagree with the
//! store it was read from. There is no refresh call and no cache to
//! invalidate. `now` is an explicit argument; public call sites pass
//! `Utc::now()`.
//!
//! Scoping functions treat an unknown project or user id as an empty result,
//! not an error.

use crate::{TaskFilter, TaskScope};

use tt_auth::Session;
use tt_core::{Task, TaskPriority, TaskStats, TaskStatus};
use tt_store::EntityStore;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Aggregate counts over the task collection.
pub fn task_stats(store: &EntityStore, now: DateTime<Utc>) -> TaskStats {
    let mut stats = TaskStats::default();

    for task in store.tasks.iter() {
        stats.total += 1;
        match task.status {
            TaskStatus::NotStarted => stats.not_started += 1,
            TaskStatus::InProgress => stats.in_progress += 1,
            TaskStatus::Completed => stats.completed += 1,
        }
        if task.is_overdue(now) {
            stats.overdue += 1;
        }
        if task.priority == TaskPriority::High {
            stats.high_priority += 1;
        }
    }

    stats
}

/// Tasks past due and not completed, in store order.
pub fn overdue_tasks(store: &EntityStore, now: DateTime<Utc>) -> Vec<Task> {
    store
        .tasks
        .iter()
        .filter(|t| t.is_overdue(now))
        .cloned()
        .collect()
}

/// Tasks assigned to the session user; empty when nobody is logged in.
pub fn my_tasks(store: &EntityStore, session: &Session) -> Vec<Task> {
    match session.current_user_id() {
        Some(user_id) => store
            .tasks
            .iter()
            .filter(|t| t.assignee_id == user_id)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// Apply a composed filter over the scoped task collection, preserving the
/// scoped collection's order.
pub fn filtered_tasks(store: &EntityStore, session: &Session, filter: &TaskFilter) -> Vec<Task> {
    let scoped = match filter.scope {
        TaskScope::All => store.tasks.list(),
        TaskScope::Mine => my_tasks(store, session),
    };

    scoped.into_iter().filter(|t| filter.matches(t)).collect()
}

/// Tasks belonging to a project, in store order.
pub fn tasks_for_project(store: &EntityStore, project_id: Uuid) -> Vec<Task> {
    store
        .tasks
        .iter()
        .filter(|t| t.project_id == project_id)
        .cloned()
        .collect()
}

pub fn task_count_by_status(store: &EntityStore, project_id: Uuid, status: TaskStatus) -> usize {
    store
        .tasks
        .iter()
        .filter(|t| t.project_id == project_id && t.status == status)
        .count()
}
