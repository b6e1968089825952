use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tt")]
#[command(about = "TeamTrack project and task tracking CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Act as the user with this email (demo session switch, no password)
    #[arg(long = "as", value_name = "EMAIL", global = true)]
    pub(crate) acting_as: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
