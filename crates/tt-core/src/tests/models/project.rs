use crate::{Project, ProjectStatus, TeamMember, User};

use chrono::{Duration, Utc};
use uuid::Uuid;

#[test]
fn test_project_new() {
    let manager_id = Uuid::new_v4();
    let start = Utc::now();
    let end = start + Duration::days(30);
    let project = Project::new(
        "Website Redesign".to_string(),
        "Complete overhaul".to_string(),
        start,
        end,
        manager_id,
        5,
    );

    assert_eq!(project.title, "Website Redesign");
    assert_eq!(project.status, ProjectStatus::Active);
    assert_eq!(project.manager_id, manager_id);
    assert_eq!(project.max_team_size, 5);
    assert!(project.team_members.is_empty());
    assert!(project.is_active());
}

#[test]
fn test_project_team_size_follows_member_list() {
    let manager_id = Uuid::new_v4();
    let now = Utc::now();
    let mut project = Project::new(
        "Test".to_string(),
        "Test".to_string(),
        now,
        now,
        manager_id,
        3,
    );
    assert_eq!(project.team_size(), 0);

    let user = User::new(
        "Mike Chen".to_string(),
        "mike@company.com".to_string(),
        "pw".to_string(),
        crate::Role::TeamMember,
    );
    project.team_members.push(TeamMember::from_user(&user, now));

    assert_eq!(project.team_size(), 1);
    assert!(project.has_member(user.id));
    assert!(!project.has_member(Uuid::new_v4()));
}
