mod projects;

use crate::AppContext;

use tt_config::Config;
use tt_core::{Project, Task, User};
use tt_store::{MemoryTransport, Result as TransportResult, Transport, TransportError};

use uuid::Uuid;

pub(crate) fn seeded_context() -> AppContext {
    AppContext::new(Config::default(), Box::new(MemoryTransport::seeded())).unwrap()
}

/// Seeded context logged in as the seed manager.
pub(crate) fn manager_context() -> AppContext {
    let mut ctx = seeded_context();
    ctx.login("sarah@company.com", "Manager@2025").unwrap();
    ctx
}

/// Seeded context logged in as a team member.
pub(crate) fn member_context() -> AppContext {
    let mut ctx = seeded_context();
    ctx.login("mike@company.com", "Team2025!").unwrap();
    ctx
}

pub(crate) fn task_by_title(ctx: &AppContext, title: &str) -> Task {
    ctx.tasks().into_iter().find(|t| t.title == title).unwrap()
}

pub(crate) fn project_by_title(ctx: &AppContext, title: &str) -> Project {
    ctx.projects()
        .into_iter()
        .find(|p| p.title == title)
        .unwrap()
}

/// Transport that serves the seed dataset but fails every write, for
/// store-untouched-on-failure tests.
pub(crate) struct FailingWriteTransport {
    inner: MemoryTransport,
}

impl FailingWriteTransport {
    pub(crate) fn seeded() -> Self {
        Self {
            inner: MemoryTransport::seeded(),
        }
    }

    fn backend_offline<T>() -> TransportResult<T> {
        Err(TransportError::unavailable("backend offline"))
    }
}

impl Transport for FailingWriteTransport {
    fn fetch_users(&mut self) -> TransportResult<Vec<User>> {
        self.inner.fetch_users()
    }

    fn fetch_projects(&mut self) -> TransportResult<Vec<Project>> {
        self.inner.fetch_projects()
    }

    fn fetch_tasks(&mut self) -> TransportResult<Vec<Task>> {
        self.inner.fetch_tasks()
    }

    fn create_user(&mut self, _user: &User) -> TransportResult<User> {
        Self::backend_offline()
    }

    fn update_user(&mut self, _user: &User) -> TransportResult<User> {
        Self::backend_offline()
    }

    fn delete_user(&mut self, _id: Uuid) -> TransportResult<()> {
        Self::backend_offline()
    }

    fn create_project(&mut self, _project: &Project) -> TransportResult<Project> {
        Self::backend_offline()
    }

    fn update_project(&mut self, _project: &Project) -> TransportResult<Project> {
        Self::backend_offline()
    }

    fn delete_project(&mut self, _id: Uuid) -> TransportResult<()> {
        Self::backend_offline()
    }

    fn create_task(&mut self, _task: &Task) -> TransportResult<Task> {
        Self::backend_offline()
    }

    fn update_task(&mut self, _task: &Task) -> TransportResult<Task> {
        Self::backend_offline()
    }

    fn delete_task(&mut self, _id: Uuid) -> TransportResult<()> {
        Self::backend_offline()
    }
}
