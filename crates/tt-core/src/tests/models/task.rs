use crate::{Task, TaskPriority, TaskStatus};

use chrono::{Duration, Utc};
use uuid::Uuid;

fn sample_task() -> Task {
    Task::new(
        Uuid::new_v4(),
        "Design homepage mockup".to_string(),
        "Three concepts for review".to_string(),
        Utc::now(),
        TaskPriority::High,
        Uuid::new_v4(),
        "Mike Chen".to_string(),
    )
}

#[test]
fn test_task_new() {
    let task = sample_task();

    assert_eq!(task.status, TaskStatus::NotStarted);
    assert_eq!(task.priority, TaskPriority::High);
    assert_eq!(task.assignee_name, "Mike Chen");
}

#[test]
fn test_task_overdue_when_past_due_and_not_completed() {
    let mut task = sample_task();
    let now = task.due_date + Duration::days(1);

    assert!(task.is_overdue(now));

    task.status = TaskStatus::InProgress;
    assert!(task.is_overdue(now));
}

#[test]
fn test_task_not_overdue_when_completed() {
    let mut task = sample_task();
    task.status = TaskStatus::Completed;

    assert!(!task.is_overdue(task.due_date + Duration::days(365)));
}

#[test]
fn test_task_not_overdue_when_due_in_future() {
    let task = sample_task();

    assert!(!task.is_overdue(task.due_date - Duration::hours(1)));
}

#[test]
fn test_task_not_overdue_at_exact_due_date() {
    let task = sample_task();

    // Strictly before `now`, not before-or-equal
    assert!(!task.is_overdue(task.due_date));
}
