use crate::tests::{
    FailingWriteTransport, manager_context, member_context, project_by_title, seeded_context,
};
use crate::{AppContext, ProjectDraft, ProjectPatch, ServiceError};

use tt_config::Config;
use tt_core::ProjectStatus;

use chrono::{Duration, Utc};
use uuid::Uuid;

fn draft(title: &str) -> ProjectDraft {
    let start = Utc::now();
    ProjectDraft {
        title: title.to_string(),
        description: "A project".to_string(),
        start_date: start,
        end_date: start + Duration::days(30),
        max_team_size: None,
    }
}

// =========================================================================
// Create
// =========================================================================

#[test]
fn given_manager_when_create_project_then_committed_with_defaults() {
    // Given
    let mut ctx = manager_context();
    let sarah = ctx.session().current_user().unwrap().id;

    // When
    let project = ctx.create_project(draft("API Gateway")).unwrap();

    // Then
    assert_eq!(project.title, "API Gateway");
    assert_eq!(project.status, ProjectStatus::Active);
    assert_eq!(project.manager_id, sarah);
    // cap defaults from configuration
    assert_eq!(project.max_team_size, 5);
    assert_eq!(ctx.projects().len(), 3);
}

#[test]
fn given_team_member_when_create_project_then_unauthorized_and_store_unchanged() {
    let mut ctx = member_context();

    let result = ctx.create_project(draft("Rogue project"));

    assert!(matches!(result, Err(ServiceError::Unauthorized { .. })));
    assert_eq!(ctx.projects().len(), 2);
}

#[test]
fn given_no_session_when_create_project_then_unauthorized() {
    let mut ctx = seeded_context();

    let result = ctx.create_project(draft("Anonymous project"));

    assert!(matches!(result, Err(ServiceError::Unauthorized { .. })));
}

#[test]
fn given_end_date_before_start_when_create_project_then_validation_error() {
    let mut ctx = manager_context();
    let start = Utc::now();
    let bad = ProjectDraft {
        end_date: start - Duration::days(1),
        start_date: start,
        ..draft("Backwards")
    };

    let result = ctx.create_project(bad);

    let err = result.unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert_eq!(err.field(), Some("end_date"));
    assert_eq!(ctx.projects().len(), 2);
}

#[test]
fn given_blank_title_when_create_project_then_validation_error() {
    let mut ctx = manager_context();

    let result = ctx.create_project(draft("   "));

    assert!(matches!(result, Err(ServiceError::Validation { .. })));
}

// =========================================================================
// Update
// =========================================================================

#[test]
fn given_owning_manager_when_update_project_then_patch_applied() {
    // Given
    let mut ctx = manager_context();
    let website = project_by_title(&ctx, "Website Redesign");

    // When
    let patch = ProjectPatch {
        status: Some(ProjectStatus::OnHold),
        description: Some("Paused until next quarter".to_string()),
        ..ProjectPatch::default()
    };
    let updated = ctx.update_project(website.id, patch).unwrap();

    // Then
    assert_eq!(updated.status, ProjectStatus::OnHold);
    assert_eq!(updated.description, "Paused until next quarter");
    // untouched fields survive
    assert_eq!(updated.title, "Website Redesign");
    assert_eq!(updated.team_members.len(), 2);
}

#[test]
fn given_team_member_when_update_project_then_unauthorized() {
    let mut ctx = member_context();
    let website = project_by_title(&ctx, "Website Redesign");

    let result = ctx.update_project(
        website.id,
        ProjectPatch {
            title: Some("Hijacked".to_string()),
            ..ProjectPatch::default()
        },
    );

    assert!(matches!(result, Err(ServiceError::Unauthorized { .. })));
    assert_eq!(
        project_by_title(&ctx, "Website Redesign").title,
        "Website Redesign"
    );
}

#[test]
fn given_unknown_id_when_update_project_then_not_found() {
    let mut ctx = manager_context();

    let result = ctx.update_project(Uuid::new_v4(), ProjectPatch::default());

    assert!(matches!(result, Err(ServiceError::NotFound { .. })));
}

#[test]
fn given_patch_moving_end_before_start_when_update_project_then_validation_error() {
    let mut ctx = manager_context();
    let website = project_by_title(&ctx, "Website Redesign");

    let result = ctx.update_project(
        website.id,
        ProjectPatch {
            end_date: Some(website.start_date - Duration::days(1)),
            ..ProjectPatch::default()
        },
    );

    assert!(matches!(result, Err(ServiceError::Validation { .. })));
}

// =========================================================================
// Delete (cascades to tasks)
// =========================================================================

#[test]
fn given_manager_when_delete_project_then_project_and_its_tasks_removed() {
    // Given
    let mut ctx = manager_context();
    let website = project_by_title(&ctx, "Website Redesign");
    assert_eq!(ctx.tasks_for_project(website.id).len(), 3);

    // When
    ctx.delete_project(website.id).unwrap();

    // Then
    assert_eq!(ctx.projects().len(), 1);
    assert_eq!(ctx.tasks().len(), 1);
    assert!(ctx.tasks_for_project(website.id).is_empty());
    assert!(ctx.dangling_tasks().is_empty());
}

#[test]
fn given_team_member_when_delete_project_then_unauthorized() {
    let mut ctx = member_context();
    let website = project_by_title(&ctx, "Website Redesign");

    let result = ctx.delete_project(website.id);

    assert!(matches!(result, Err(ServiceError::Unauthorized { .. })));
    assert_eq!(ctx.projects().len(), 2);
    assert_eq!(ctx.tasks().len(), 4);
}

#[test]
fn given_unknown_id_when_delete_project_then_not_found() {
    let mut ctx = manager_context();

    let result = ctx.delete_project(Uuid::new_v4());

    assert!(matches!(result, Err(ServiceError::NotFound { .. })));
}

// =========================================================================
// Transport failure leaves the store untouched
// =========================================================================

#[test]
fn given_failing_transport_when_create_project_then_error_and_store_untouched() {
    // Given
    let mut ctx = AppContext::new(
        Config::default(),
        Box::new(FailingWriteTransport::seeded()),
    )
    .unwrap();
    ctx.login("sarah@company.com", "Manager@2025").unwrap();
    let version = ctx.store_version();

    // When
    let result = ctx.create_project(draft("Never lands"));

    // Then
    assert!(matches!(result, Err(ServiceError::Transport { .. })));
    assert_eq!(ctx.projects().len(), 2);
    assert_eq!(ctx.store_version(), version);
}

#[test]
fn given_failing_transport_when_delete_project_then_nothing_removed() {
    // Given
    let mut ctx = AppContext::new(
        Config::default(),
        Box::new(FailingWriteTransport::seeded()),
    )
    .unwrap();
    ctx.login("sarah@company.com", "Manager@2025").unwrap();
    let website = project_by_title(&ctx, "Website Redesign");

    // When
    let result = ctx.delete_project(website.id);

    // Then
    assert!(matches!(result, Err(ServiceError::Transport { .. })));
    assert_eq!(ctx.projects().len(), 2);
    assert_eq!(ctx.tasks().len(), 4);
}
