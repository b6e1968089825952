//! The application context: the single public surface for UI-level callers.
//!
//! Owns the store, session, and transport. Every write follows the same
//! shape: authorize against the session, validate the domain invariants,
//! persist through the transport, then commit to the store. A failure at any
//! step returns a typed error and leaves the store at its last known-good
//! snapshot; there are no partial writes.

use crate::{
    ProjectDraft, ProjectPatch, RecordValidator, Result as ServiceResult, ServiceError, TaskDraft,
    TaskFilter, TaskPatch, TeamViolation, UserDraft, UserPatch, views,
};

use tt_auth::Session;
use tt_config::Config;
use tt_core::{Project, Task, TaskStats, TaskStatus, TeamMember, User};
use tt_store::{EntityStore, Transport};

use chrono::Utc;
use log::info;
use uuid::Uuid;

pub struct AppContext {
    config: Config,
    store: EntityStore,
    session: Session,
    transport: Box<dyn Transport>,
}

impl AppContext {
    /// Construct the context and populate the store from the transport.
    pub fn new(config: Config, mut transport: Box<dyn Transport>) -> ServiceResult<Self> {
        let mut store = EntityStore::new();
        store.load(transport.as_mut())?;

        Ok(Self {
            config,
            store,
            session: Session::new(),
            transport,
        })
    }

    /// Clear the session and reload the store from the transport snapshot.
    /// Used on logout and for test teardown.
    pub fn reset(&mut self) -> ServiceResult<()> {
        self.session.logout();
        self.store.load(self.transport.as_mut())?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Store version, a memoization key for callers that cache derived data.
    pub fn store_version(&self) -> u64 {
        self.store.version()
    }

    // ---------------------------------------------------------------------
    // Session operations
    // ---------------------------------------------------------------------

    pub fn login(&mut self, email: &str, password: &str) -> tt_auth::Result<User> {
        self.session.login(&self.store, email, password)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// Credential-free session substitution; a demo/testing affordance.
    pub fn switch_user(&mut self, user_id: Uuid) -> tt_auth::Result<User> {
        self.session.switch_user(&self.store, user_id)
    }

    // ---------------------------------------------------------------------
    // Read views - recomputed from the live store on every call
    // ---------------------------------------------------------------------

    pub fn users(&self) -> Vec<User> {
        self.store.users.list()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.store.projects.list()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.store.tasks.list()
    }

    pub fn project(&self, id: Uuid) -> Option<Project> {
        self.store.projects.get(id)
    }

    pub fn task(&self, id: Uuid) -> Option<Task> {
        self.store.tasks.get(id)
    }

    pub fn user(&self, id: Uuid) -> Option<User> {
        self.store.users.get(id)
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.store.find_user_by_email(email)
    }

    pub fn task_stats(&self) -> TaskStats {
        views::task_stats(&self.store, Utc::now())
    }

    pub fn overdue_tasks(&self) -> Vec<Task> {
        views::overdue_tasks(&self.store, Utc::now())
    }

    pub fn my_tasks(&self) -> Vec<Task> {
        views::my_tasks(&self.store, &self.session)
    }

    pub fn filtered_tasks(&self, filter: &TaskFilter) -> Vec<Task> {
        views::filtered_tasks(&self.store, &self.session, filter)
    }

    pub fn tasks_for_project(&self, project_id: Uuid) -> Vec<Task> {
        views::tasks_for_project(&self.store, project_id)
    }

    pub fn task_count_by_status(&self, project_id: Uuid, status: TaskStatus) -> usize {
        views::task_count_by_status(&self.store, project_id, status)
    }

    /// All users projected as assignable team members.
    pub fn team_member_view(&self) -> Vec<TeamMember> {
        Session::team_member_view(&self.store, Utc::now())
    }

    /// Tasks whose project reference no longer resolves.
    pub fn dangling_tasks(&self) -> Vec<Task> {
        self.store.dangling_tasks()
    }

    // ---------------------------------------------------------------------
    // Authorization
    // ---------------------------------------------------------------------

    fn require_authenticated(&self, action: &str) -> ServiceResult<User> {
        self.session
            .current_user()
            .cloned()
            .ok_or_else(|| ServiceError::unauthorized(format!("Must be logged in to {action}")))
    }

    fn require_manager(&self, action: &str) -> ServiceResult<User> {
        let user = self.require_authenticated(action)?;
        if !user.is_manager() {
            return Err(ServiceError::unauthorized(format!(
                "Only managers can {action}"
            )));
        }
        Ok(user)
    }

    /// A project can be managed by any manager, or by the manager who owns it.
    pub fn can_manage_project(&self, project: &Project) -> bool {
        self.session.is_manager() || self.session.current_user_id() == Some(project.manager_id)
    }

    fn require_project_manager(&self, project: &Project, action: &str) -> ServiceResult<()> {
        self.require_authenticated(action)?;
        if !self.can_manage_project(project) {
            return Err(ServiceError::unauthorized(format!(
                "Only a manager can {action}"
            )));
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Project operations
    // ---------------------------------------------------------------------

    pub fn create_project(&mut self, draft: ProjectDraft) -> ServiceResult<Project> {
        // 1. Authorize
        let user = self.require_manager("create projects")?;

        // 2. Validate
        let limits = &self.config.validation;
        RecordValidator::validate_string(&draft.title, "title", 1, limits.max_title_length)?;
        RecordValidator::validate_string(
            &draft.description,
            "description",
            0,
            limits.max_description_length,
        )?;
        RecordValidator::validate_date_range(draft.start_date, draft.end_date)?;

        let max_team_size = draft.max_team_size.unwrap_or(limits.default_max_team_size);

        // 3. Build + persist
        let project = Project::new(
            draft.title.trim().to_string(),
            draft.description.trim().to_string(),
            draft.start_date,
            draft.end_date,
            user.id,
            max_team_size,
        );
        let committed = self.transport.create_project(&project)?;

        // 4. Commit
        let committed = self.store.projects.insert(committed);
        info!("Created project {} ({})", committed.title, committed.id);
        Ok(committed)
    }

    pub fn update_project(&mut self, id: Uuid, patch: ProjectPatch) -> ServiceResult<Project> {
        // 1. Fetch existing
        let mut project = self
            .store
            .projects
            .get(id)
            .ok_or_else(|| ServiceError::not_found(format!("Project {id}")))?;

        // 2. Authorize: any manager, or the project's own manager
        self.require_project_manager(&project, "edit this project")?;

        // 3. Apply + validate
        let limits = &self.config.validation;
        if let Some(title) = patch.title {
            RecordValidator::validate_string(&title, "title", 1, limits.max_title_length)?;
            project.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            RecordValidator::validate_string(
                &description,
                "description",
                0,
                limits.max_description_length,
            )?;
            project.description = description.trim().to_string();
        }
        if let Some(start_date) = patch.start_date {
            project.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            project.end_date = end_date;
        }
        RecordValidator::validate_date_range(project.start_date, project.end_date)?;
        if let Some(status) = patch.status {
            project.status = status;
        }

        // 4. Persist + commit
        let committed = self.transport.update_project(&project)?;
        let committed = self
            .store
            .projects
            .replace(id, committed)
            .ok_or_else(|| ServiceError::not_found(format!("Project {id}")))?;
        info!("Updated project {} ({})", committed.title, committed.id);
        Ok(committed)
    }

    /// Delete a project and all of its tasks.
    ///
    /// The cascade is deliberate: it keeps the no-dangling-task invariant,
    /// and the store commit happens only after every transport delete has
    /// succeeded.
    pub fn delete_project(&mut self, id: Uuid) -> ServiceResult<()> {
        // 1. Authorize
        self.require_manager("delete projects")?;

        // 2. Fetch existing
        let project = self
            .store
            .projects
            .get(id)
            .ok_or_else(|| ServiceError::not_found(format!("Project {id}")))?;

        // 3. Persist: the project, then its tasks
        self.transport.delete_project(id)?;
        let task_ids: Vec<Uuid> = views::tasks_for_project(&self.store, id)
            .iter()
            .map(|t| t.id)
            .collect();
        for task_id in &task_ids {
            self.transport.delete_task(*task_id)?;
        }

        // 4. Commit
        self.store.projects.remove(id);
        let removed = self.store.tasks.retain(|t| t.project_id != id);
        info!(
            "Deleted project {} ({}) and {} task(s)",
            project.title, id, removed
        );
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Task operations
    // ---------------------------------------------------------------------

    pub fn create_task(&mut self, draft: TaskDraft) -> ServiceResult<Task> {
        // 1. Authorize: any authenticated user may create tasks
        self.require_authenticated("create tasks")?;

        // 2. Validate references and fields
        if !self.store.projects.contains(draft.project_id) {
            return Err(ServiceError::not_found(format!(
                "Project {}",
                draft.project_id
            )));
        }
        let assignee = self
            .store
            .users
            .get(draft.assignee_id)
            .ok_or_else(|| ServiceError::not_found(format!("User {}", draft.assignee_id)))?;

        let limits = &self.config.validation;
        RecordValidator::validate_string(&draft.title, "title", 1, limits.max_title_length)?;
        RecordValidator::validate_string(
            &draft.description,
            "description",
            0,
            limits.max_description_length,
        )?;

        // 3. Build + persist; the assignee name is snapshotted here
        let task = Task::new(
            draft.project_id,
            draft.title.trim().to_string(),
            draft.description.trim().to_string(),
            draft.due_date,
            draft.priority,
            assignee.id,
            assignee.name.clone(),
        );
        let committed = self.transport.create_task(&task)?;

        // 4. Commit
        let committed = self.store.tasks.insert(committed);
        info!("Created task {} ({})", committed.title, committed.id);
        Ok(committed)
    }

    pub fn update_task(&mut self, id: Uuid, patch: TaskPatch) -> ServiceResult<Task> {
        // 1. Authorize
        self.require_authenticated("edit tasks")?;

        // 2. Fetch existing
        let mut task = self
            .store
            .tasks
            .get(id)
            .ok_or_else(|| ServiceError::not_found(format!("Task {id}")))?;

        // 3. Apply + validate
        let limits = &self.config.validation;
        if let Some(title) = patch.title {
            RecordValidator::validate_string(&title, "title", 1, limits.max_title_length)?;
            task.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            RecordValidator::validate_string(
                &description,
                "description",
                0,
                limits.max_description_length,
            )?;
            task.description = description.trim().to_string();
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(assignee_id) = patch.assignee_id {
            let assignee = self
                .store
                .users
                .get(assignee_id)
                .ok_or_else(|| ServiceError::not_found(format!("User {assignee_id}")))?;
            task.assignee_id = assignee.id;
            task.assignee_name = assignee.name;
        }

        // 4. Persist + commit
        let committed = self.transport.update_task(&task)?;
        let committed = self
            .store
            .tasks
            .replace(id, committed)
            .ok_or_else(|| ServiceError::not_found(format!("Task {id}")))?;
        info!("Updated task {} ({})", committed.title, committed.id);
        Ok(committed)
    }

    /// Status-only convenience over [`Self::update_task`].
    pub fn update_task_status(&mut self, id: Uuid, status: TaskStatus) -> ServiceResult<Task> {
        self.update_task(id, TaskPatch::status_only(status))
    }

    pub fn delete_task(&mut self, id: Uuid) -> ServiceResult<()> {
        // 1. Authorize: managers only
        self.require_manager("delete tasks")?;

        // 2. Fetch existing
        let task = self
            .store
            .tasks
            .get(id)
            .ok_or_else(|| ServiceError::not_found(format!("Task {id}")))?;

        // 3. Persist + commit
        self.transport.delete_task(id)?;
        self.store.tasks.remove(id);
        info!("Deleted task {} ({})", task.title, id);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Team operations
    // ---------------------------------------------------------------------

    /// Report whether a project's team satisfies the membership invariants,
    /// and which one it violates when not.
    pub fn validate_team(&self, project: &Project) -> Result<(), TeamViolation> {
        RecordValidator::validate_team(project)
    }

    pub fn add_team_member(&mut self, project_id: Uuid, user_id: Uuid) -> ServiceResult<Project> {
        // 1. Fetch project + user
        let mut project = self
            .store
            .projects
            .get(project_id)
            .ok_or_else(|| ServiceError::not_found(format!("Project {project_id}")))?;
        let user = self
            .store
            .users
            .get(user_id)
            .ok_or_else(|| ServiceError::not_found(format!("User {user_id}")))?;

        // 2. Authorize
        self.require_project_manager(&project, "manage this project's team")?;

        // 3. Validate membership invariants before committing
        if project.has_member(user_id) {
            return Err(ServiceError::validation(
                format!("{} is already on the team", user.name),
                Some("user_id"),
            ));
        }
        if project.team_size() + 1 > project.max_team_size {
            return Err(ServiceError::validation(
                format!(
                    "Team size {} exceeds maximum {}",
                    project.team_size() + 1,
                    project.max_team_size
                ),
                Some("team_members"),
            ));
        }

        // 4. Persist + commit
        project
            .team_members
            .push(TeamMember::from_user(&user, Utc::now()));
        let committed = self.transport.update_project(&project)?;
        let committed = self
            .store
            .projects
            .replace(project_id, committed)
            .ok_or_else(|| ServiceError::not_found(format!("Project {project_id}")))?;
        info!("Added {} to project {}", user.name, committed.title);
        Ok(committed)
    }

    pub fn remove_team_member(
        &mut self,
        project_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<Project> {
        // 1. Fetch project
        let mut project = self
            .store
            .projects
            .get(project_id)
            .ok_or_else(|| ServiceError::not_found(format!("Project {project_id}")))?;

        // 2. Authorize
        self.require_project_manager(&project, "manage this project's team")?;

        // 3. The member must actually be on the team
        if !project.has_member(user_id) {
            return Err(ServiceError::not_found(format!(
                "User {user_id} is not on the team of project {project_id}"
            )));
        }

        // 4. Persist + commit
        project.team_members.retain(|m| m.id != user_id);
        let committed = self.transport.update_project(&project)?;
        let committed = self
            .store
            .projects
            .replace(project_id, committed)
            .ok_or_else(|| ServiceError::not_found(format!("Project {project_id}")))?;
        info!("Removed {} from project {}", user_id, committed.title);
        Ok(committed)
    }

    // ---------------------------------------------------------------------
    // User operations
    // ---------------------------------------------------------------------

    pub fn add_user(&mut self, draft: UserDraft) -> ServiceResult<User> {
        // 1. Authorize
        self.require_manager("add users")?;

        // 2. Validate
        RecordValidator::validate_string(&draft.name, "name", 1, 200)?;
        RecordValidator::validate_string(&draft.email, "email", 1, 320)?;
        RecordValidator::validate_string(&draft.password, "password", 1, 200)?;
        if self.store.find_user_by_email(draft.email.trim()).is_some() {
            return Err(ServiceError::validation(
                format!("Email {} is already in use", draft.email.trim()),
                Some("email"),
            ));
        }

        // 3. Build + persist
        let user = User::new(
            draft.name.trim().to_string(),
            draft.email.trim().to_string(),
            draft.password,
            draft.role,
        );
        let committed = self.transport.create_user(&user)?;

        // 4. Commit
        let committed = self.store.users.insert(committed);
        info!("Added user {} ({})", committed.name, committed.role);
        Ok(committed)
    }

    pub fn update_user(&mut self, id: Uuid, patch: UserPatch) -> ServiceResult<User> {
        // 1. Authorize
        self.require_manager("edit users")?;

        // 2. Fetch existing
        let mut user = self
            .store
            .users
            .get(id)
            .ok_or_else(|| ServiceError::not_found(format!("User {id}")))?;

        // 3. Apply + validate
        if let Some(name) = patch.name {
            RecordValidator::validate_string(&name, "name", 1, 200)?;
            user.name = name.trim().to_string();
        }
        if let Some(email) = patch.email {
            RecordValidator::validate_string(&email, "email", 1, 320)?;
            let email = email.trim().to_string();
            if email != user.email && self.store.find_user_by_email(&email).is_some() {
                return Err(ServiceError::validation(
                    format!("Email {email} is already in use"),
                    Some("email"),
                ));
            }
            user.email = email;
        }
        if let Some(password) = patch.password {
            RecordValidator::validate_string(&password, "password", 1, 200)?;
            user.password = password;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }

        // 4. Persist + commit
        let committed = self.transport.update_user(&user)?;
        let committed = self
            .store
            .users
            .replace(id, committed)
            .ok_or_else(|| ServiceError::not_found(format!("User {id}")))?;
        info!("Updated user {} ({})", committed.name, committed.id);
        Ok(committed)
    }

    /// Delete a user. Guarded: not the current session user, and not the
    /// last user remaining in the store.
    pub fn delete_user(&mut self, id: Uuid) -> ServiceResult<()> {
        // 1. Authorize
        let actor = self.require_manager("delete users")?;

        // 2. Fetch + guards
        let user = self
            .store
            .users
            .get(id)
            .ok_or_else(|| ServiceError::not_found(format!("User {id}")))?;

        if self.store.users.len() <= 1 {
            return Err(ServiceError::validation(
                "Cannot delete the last remaining user",
                Some("user_id"),
            ));
        }
        if actor.id == id {
            return Err(ServiceError::validation(
                "Cannot delete the currently logged-in user",
                Some("user_id"),
            ));
        }

        // 3. Persist + commit
        self.transport.delete_user(id)?;
        self.store.users.remove(id);
        info!("Deleted user {} ({})", user.name, id);
        Ok(())
    }
}
