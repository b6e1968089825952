//! Demo dataset carried by the in-memory transport.
//!
//! Identifiers are generated fresh per process; tests address records by
//! email or title.

use tt_core::{
    Permission, Project, ProjectStatus, Role, Task, TaskPriority, TaskStatus, TeamMember, User,
};

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SeedData {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
}

// Literal dates, always valid.
fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, 0, 0, 0).unwrap()
}

/// Build the demo dataset: three users, two projects, four tasks.
pub fn demo_data() -> SeedData {
    let sarah = User::new(
        "Sarah Johnson".to_string(),
        "sarah@company.com".to_string(),
        "Manager@2025".to_string(),
        Role::Manager,
    );
    let mike = User::new(
        "Mike Chen".to_string(),
        "mike@company.com".to_string(),
        "Team2025!".to_string(),
        Role::TeamMember,
    );
    let emily = User::new(
        "Emily Davis".to_string(),
        "emily@company.com".to_string(),
        "Team2025!".to_string(),
        Role::TeamMember,
    );

    let website = Project {
        id: Uuid::new_v4(),
        title: "Website Redesign".to_string(),
        description: "Complete overhaul of company website with modern UI/UX".to_string(),
        start_date: day(2025, 11, 1),
        end_date: day(2025, 12, 15),
        status: ProjectStatus::Active,
        manager_id: sarah.id,
        created_at: day(2025, 11, 1),
        team_members: vec![
            TeamMember {
                id: mike.id,
                name: mike.name.clone(),
                email: mike.email.clone(),
                role: mike.role,
                assigned_date: day(2025, 11, 1),
                permissions: vec![Permission::CreateTasks, Permission::EditTasks],
            },
            // Emily's assignment carries a narrower grant than her role
            // default; per-assignment permissions are allowed to diverge.
            TeamMember {
                id: emily.id,
                name: emily.name.clone(),
                email: emily.email.clone(),
                role: emily.role,
                assigned_date: day(2025, 11, 1),
                permissions: vec![Permission::CreateTasks],
            },
        ],
        max_team_size: 5,
    };

    let mobile = Project {
        id: Uuid::new_v4(),
        title: "Mobile App Development".to_string(),
        description: "Build native iOS and Android apps".to_string(),
        start_date: day(2025, 11, 15),
        end_date: day(2026, 2, 1),
        status: ProjectStatus::Active,
        manager_id: sarah.id,
        created_at: day(2025, 11, 5),
        team_members: vec![TeamMember {
            id: emily.id,
            name: emily.name.clone(),
            email: emily.email.clone(),
            role: emily.role,
            assigned_date: day(2025, 11, 5),
            permissions: vec![Permission::CreateTasks, Permission::EditTasks],
        }],
        max_team_size: 4,
    };

    let tasks = vec![
        Task {
            id: Uuid::new_v4(),
            project_id: website.id,
            title: "Design homepage mockup".to_string(),
            description: "Create 3 different design concepts for client review".to_string(),
            due_date: day(2025, 11, 15),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            assignee_id: mike.id,
            assignee_name: mike.name.clone(),
            created_at: day(2025, 11, 7),
        },
        Task {
            id: Uuid::new_v4(),
            project_id: website.id,
            title: "Setup development environment".to_string(),
            description: "Configure build pipeline and CI/CD".to_string(),
            due_date: day(2025, 11, 10),
            status: TaskStatus::Completed,
            priority: TaskPriority::Medium,
            assignee_id: emily.id,
            assignee_name: emily.name.clone(),
            created_at: day(2025, 11, 6),
        },
        Task {
            id: Uuid::new_v4(),
            project_id: mobile.id,
            title: "Research target audience".to_string(),
            description: "Analyze user demographics and preferences".to_string(),
            due_date: day(2025, 11, 20),
            status: TaskStatus::NotStarted,
            priority: TaskPriority::High,
            assignee_id: mike.id,
            assignee_name: mike.name.clone(),
            created_at: day(2025, 11, 8),
        },
        Task {
            id: Uuid::new_v4(),
            project_id: website.id,
            title: "Implement user authentication".to_string(),
            description: "Add login and registration system".to_string(),
            due_date: day(2025, 11, 25),
            status: TaskStatus::NotStarted,
            priority: TaskPriority::High,
            assignee_id: emily.id,
            assignee_name: emily.name.clone(),
            created_at: day(2025, 11, 9),
        },
    ];

    SeedData {
        users: vec![sarah, mike, emily],
        projects: vec![website, mobile],
        tasks,
    }
}
