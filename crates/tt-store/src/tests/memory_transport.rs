use crate::{MemoryTransport, Transport, TransportError};

use tt_core::{Role, User};

use uuid::Uuid;

#[test]
fn given_empty_transport_when_fetch_then_nothing() {
    let mut transport = MemoryTransport::empty();

    assert!(transport.fetch_users().unwrap().is_empty());
    assert!(transport.fetch_projects().unwrap().is_empty());
    assert!(transport.fetch_tasks().unwrap().is_empty());
}

#[test]
fn given_created_user_when_fetch_then_present() {
    // Given
    let mut transport = MemoryTransport::empty();
    let user = User::new(
        "Alice".to_string(),
        "alice@company.com".to_string(),
        "pw".to_string(),
        Role::TeamMember,
    );

    // When
    let created = transport.create_user(&user).unwrap();

    // Then
    assert_eq!(created.id, user.id);
    assert_eq!(transport.fetch_users().unwrap().len(), 1);
}

#[test]
fn given_unknown_user_when_update_then_rejected() {
    let mut transport = MemoryTransport::empty();
    let ghost = User::new(
        "Ghost".to_string(),
        "ghost@company.com".to_string(),
        "pw".to_string(),
        Role::TeamMember,
    );

    let result = transport.update_user(&ghost);

    assert!(matches!(result, Err(TransportError::Rejected { .. })));
}

#[test]
fn given_unknown_task_when_delete_then_rejected() {
    let mut transport = MemoryTransport::seeded();

    let result = transport.delete_task(Uuid::new_v4());

    let err = result.unwrap_err();
    assert!(matches!(err, TransportError::Rejected { .. }));
    assert_eq!(err.error_code(), "TRANSPORT_REJECTED");
}

#[test]
fn given_seeded_transport_when_delete_project_then_gone() {
    // Given
    let mut transport = MemoryTransport::seeded();
    let projects = transport.fetch_projects().unwrap();
    let first = projects[0].id;

    // When
    transport.delete_project(first).unwrap();

    // Then
    let remaining = transport.fetch_projects().unwrap();
    assert_eq!(remaining.len(), projects.len() - 1);
    assert!(remaining.iter().all(|p| p.id != first));
}
