use crate::{Result as TransportResult, Transport, TransportError, seed};

use tt_core::{Project, Task, User};

use uuid::Uuid;

/// In-process transport backend.
///
/// Stands in for the external persistence API: fetches return snapshots of
/// its backing vectors, writes mutate them. Optionally pre-loaded with the
/// demo dataset.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    users: Vec<User>,
    projects: Vec<Project>,
    tasks: Vec<Task>,
}

impl MemoryTransport {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let data = seed::demo_data();
        Self {
            users: data.users,
            projects: data.projects,
            tasks: data.tasks,
        }
    }
}

impl Transport for MemoryTransport {
    fn fetch_users(&mut self) -> TransportResult<Vec<User>> {
        Ok(self.users.clone())
    }

    fn fetch_projects(&mut self) -> TransportResult<Vec<Project>> {
        Ok(self.projects.clone())
    }

    fn fetch_tasks(&mut self) -> TransportResult<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn create_user(&mut self, user: &User) -> TransportResult<User> {
        self.users.push(user.clone());
        Ok(user.clone())
    }

    fn update_user(&mut self, user: &User) -> TransportResult<User> {
        let slot = self
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| TransportError::rejected(format!("No user {}", user.id)))?;
        *slot = user.clone();
        Ok(user.clone())
    }

    fn delete_user(&mut self, id: Uuid) -> TransportResult<()> {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        if self.users.len() == before {
            return Err(TransportError::rejected(format!("No user {id}")));
        }
        Ok(())
    }

    fn create_project(&mut self, project: &Project) -> TransportResult<Project> {
        self.projects.push(project.clone());
        Ok(project.clone())
    }

    fn update_project(&mut self, project: &Project) -> TransportResult<Project> {
        let slot = self
            .projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or_else(|| TransportError::rejected(format!("No project {}", project.id)))?;
        *slot = project.clone();
        Ok(project.clone())
    }

    fn delete_project(&mut self, id: Uuid) -> TransportResult<()> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return Err(TransportError::rejected(format!("No project {id}")));
        }
        Ok(())
    }

    fn create_task(&mut self, task: &Task) -> TransportResult<Task> {
        self.tasks.push(task.clone());
        Ok(task.clone())
    }

    fn update_task(&mut self, task: &Task) -> TransportResult<Task> {
        let slot = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(|| TransportError::rejected(format!("No task {}", task.id)))?;
        *slot = task.clone();
        Ok(task.clone())
    }

    fn delete_task(&mut self, id: Uuid) -> TransportResult<()> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Err(TransportError::rejected(format!("No task {id}")));
        }
        Ok(())
    }
}
