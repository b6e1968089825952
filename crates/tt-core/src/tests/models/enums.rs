use crate::{Permission, ProjectStatus, Role, TaskPriority, TaskStatus};

use std::str::FromStr;

#[test]
fn test_role_string_forms() {
    assert_eq!(Role::Manager.as_str(), "manager");
    assert_eq!(Role::TeamMember.as_str(), "team-member");
    assert_eq!(Role::from_str("manager").unwrap(), Role::Manager);
    assert_eq!(Role::from_str("team-member").unwrap(), Role::TeamMember);
    assert!(Role::from_str("admin").is_err());
}

#[test]
fn test_project_status_string_forms() {
    assert_eq!(ProjectStatus::from_str("active").unwrap(), ProjectStatus::Active);
    assert_eq!(
        ProjectStatus::from_str("completed").unwrap(),
        ProjectStatus::Completed
    );
    assert_eq!(ProjectStatus::from_str("on-hold").unwrap(), ProjectStatus::OnHold);
    assert!(ProjectStatus::from_str("archived").is_err());
}

#[test]
fn test_task_status_keeps_title_case_labels() {
    assert_eq!(TaskStatus::NotStarted.as_str(), "Not Started");
    assert_eq!(TaskStatus::from_str("In Progress").unwrap(), TaskStatus::InProgress);
    assert!(TaskStatus::from_str("in progress").is_err());
}

#[test]
fn test_task_priority_string_forms() {
    assert_eq!(TaskPriority::from_str("high").unwrap(), TaskPriority::High);
    assert!(TaskPriority::from_str("urgent").is_err());
}

#[test]
fn test_permission_vocabulary_is_closed() {
    assert_eq!(
        Permission::from_str("manage-team").unwrap(),
        Permission::ManageTeam
    );
    assert!(Permission::from_str("manage-users").is_err());
}

#[test]
fn test_task_status_serde_round_trip() {
    let json = serde_json::to_string(&TaskStatus::NotStarted).unwrap();
    assert_eq!(json, "\"Not Started\"");
    let back: TaskStatus = serde_json::from_str(&json).unwrap();
    assert_eq!(back, TaskStatus::NotStarted);
}
