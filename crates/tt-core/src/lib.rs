pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::permission::Permission;
pub use models::project::Project;
pub use models::project_status::ProjectStatus;
pub use models::role::Role;
pub use models::task::Task;
pub use models::task_priority::TaskPriority;
pub use models::task_stats::TaskStats;
pub use models::task_status::TaskStatus;
pub use models::team_member::TeamMember;
pub use models::user::User;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
