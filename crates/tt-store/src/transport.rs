use crate::Result as TransportResult;

use tt_core::{Project, Task, User};

use uuid::Uuid;

/// The opaque external fetch/persist boundary.
///
/// The core is a single logical thread: an async adapter resolves before
/// calling in, so the trait is synchronous. Racing external edits are
/// last-write-wins with no conflict detection, and a superseded in-flight
/// request is simply ignored when it resolves.
pub trait Transport {
    fn fetch_users(&mut self) -> TransportResult<Vec<User>>;
    fn fetch_projects(&mut self) -> TransportResult<Vec<Project>>;
    fn fetch_tasks(&mut self) -> TransportResult<Vec<Task>>;

    fn create_user(&mut self, user: &User) -> TransportResult<User>;
    fn update_user(&mut self, user: &User) -> TransportResult<User>;
    fn delete_user(&mut self, id: Uuid) -> TransportResult<()>;

    fn create_project(&mut self, project: &Project) -> TransportResult<Project>;
    fn update_project(&mut self, project: &Project) -> TransportResult<Project>;
    fn delete_project(&mut self, id: Uuid) -> TransportResult<()>;

    fn create_task(&mut self, task: &Task) -> TransportResult<Task>;
    fn update_task(&mut self, task: &Task) -> TransportResult<Task>;
    fn delete_task(&mut self, id: Uuid) -> TransportResult<()>;
}
