use serde::{Deserialize, Serialize};

/// Aggregate counts over a task collection.
///
/// `not_started + in_progress + completed == total` always holds; `overdue`
/// and `high_priority` overlap the status buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
    pub high_priority: usize,
}
