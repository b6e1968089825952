use crate::{Permission, Role, TeamMember, User};

use chrono::Utc;

#[test]
fn test_manager_projection_gets_full_permission_set() {
    let user = User::new(
        "Sarah Johnson".to_string(),
        "sarah@company.com".to_string(),
        "pw".to_string(),
        Role::Manager,
    );
    let member = TeamMember::from_user(&user, Utc::now());

    assert_eq!(member.id, user.id);
    assert_eq!(member.permissions.len(), 5);
    assert!(member.has_permission(Permission::DeleteTasks));
    assert!(member.has_permission(Permission::ManageTeam));
}

#[test]
fn test_team_member_projection_gets_restricted_permission_set() {
    let user = User::new(
        "Emily Davis".to_string(),
        "emily@company.com".to_string(),
        "pw".to_string(),
        Role::TeamMember,
    );
    let member = TeamMember::from_user(&user, Utc::now());

    assert!(member.has_permission(Permission::CreateTasks));
    assert!(member.has_permission(Permission::EditTasks));
    assert!(!member.has_permission(Permission::DeleteTasks));
    assert!(!member.has_permission(Permission::ManageTeam));
}

#[test]
fn test_projection_is_a_snapshot_of_the_user() {
    let mut user = User::new(
        "Mike Chen".to_string(),
        "mike@company.com".to_string(),
        "pw".to_string(),
        Role::TeamMember,
    );
    let member = TeamMember::from_user(&user, Utc::now());

    user.name = "Michael Chen".to_string();

    // The assignment keeps the name it was created with
    assert_eq!(member.name, "Mike Chen");
}
