use crate::{Collection, Result as TransportResult, Transport};

use tt_core::{Project, Task, User};

use log::{info, warn};

/// The authoritative in-memory collections, one per entity.
///
/// Mutations go through the service layer, which authorizes and validates
/// before committing here. Reads are snapshots; derived views recompute
/// from them on every call.
#[derive(Debug, Default)]
pub struct EntityStore {
    pub users: Collection<User>,
    pub projects: Collection<Project>,
    pub tasks: Collection<Task>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate all collections from the transport snapshot.
    ///
    /// A fetch failure leaves every collection at its previous state; there
    /// is no partial load.
    pub fn load(&mut self, transport: &mut dyn Transport) -> TransportResult<()> {
        let users = transport.fetch_users()?;
        let projects = transport.fetch_projects()?;
        let tasks = transport.fetch_tasks()?;

        info!(
            "Loaded {} users, {} projects, {} tasks",
            users.len(),
            projects.len(),
            tasks.len()
        );

        self.users.reload(users);
        self.projects.reload(projects);
        self.tasks.reload(tasks);

        let dangling = self.dangling_tasks();
        if !dangling.is_empty() {
            warn!(
                "{} task(s) reference a project that does not exist",
                dangling.len()
            );
        }

        Ok(())
    }

    /// Combined version over all collections. Bumps whenever any commit
    /// lands, so it can key memoized derivations.
    pub fn version(&self) -> u64 {
        self.users.version() + self.projects.version() + self.tasks.version()
    }

    /// Tasks whose project reference does not resolve.
    ///
    /// These are a data-integrity error reported to the caller; views never
    /// drop them silently.
    pub fn dangling_tasks(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| !self.projects.contains(t.project_id))
            .cloned()
            .collect()
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users.iter().find(|u| u.email == email).cloned()
    }
}
