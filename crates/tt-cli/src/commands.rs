use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate task statistics
    Stats,

    /// List tasks, optionally filtered
    Tasks {
        /// Case-insensitive search over title and description
        #[arg(long)]
        search: Option<String>,

        /// Exact status match: "Not Started", "In Progress", "Completed"
        #[arg(long)]
        status: Option<String>,

        /// Exact priority match: low, medium, high
        #[arg(long)]
        priority: Option<String>,

        /// Only tasks assigned to the session user
        #[arg(long)]
        mine: bool,
    },

    /// Tasks past due and not completed
    Overdue,

    /// List projects
    Projects,

    /// All users projected as assignable team members
    Team,
}
