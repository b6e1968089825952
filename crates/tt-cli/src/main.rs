//! tt - TeamTrack CLI
//!
//! A command-line front end over the in-memory tracking core, for demos and
//! scripting. Output is JSON; logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Aggregate task statistics
//! tt stats --pretty
//!
//! # High-priority unstarted tasks
//! tt tasks --status "Not Started" --priority high
//!
//! # Mike's own tasks, via the demo session switch
//! tt --as mike@company.com tasks --mine
//! ```

mod cli;
mod commands;
mod logger;

use crate::{cli::Cli, commands::Commands};

use tt_config::Config;
use tt_core::{TaskPriority, TaskStatus};
use tt_service::{AppContext, TaskFilter, TaskScope};
use tt_store::{MemoryTransport, Transport};

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load and validate configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.clone().map(PathBuf::from),
        config.logging.colored,
    ) {
        eprintln!("Error initializing logger: {e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let transport: Box<dyn Transport> = if config.seed.enabled {
        Box::new(MemoryTransport::seeded())
    } else {
        Box::new(MemoryTransport::empty())
    };

    let mut ctx = match AppContext::new(config, transport) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading data: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Select the session via the credential-free demo switch
    if let Some(ref email) = cli.acting_as {
        let user = match ctx.find_user_by_email(email) {
            Some(user) => user,
            None => {
                eprintln!("Error: no user with email {email}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = ctx.switch_user(user.id) {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    }

    let result = execute(&ctx, cli.command);

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(ctx: &AppContext, command: Commands) -> Result<serde_json::Value, Box<dyn Error>> {
    let value = match command {
        Commands::Stats => serde_json::to_value(ctx.task_stats())?,

        Commands::Tasks {
            search,
            status,
            priority,
            mine,
        } => {
            let filter = TaskFilter {
                scope: if mine { TaskScope::Mine } else { TaskScope::All },
                search,
                status: status.as_deref().map(TaskStatus::from_str).transpose()?,
                priority: priority.as_deref().map(TaskPriority::from_str).transpose()?,
            };
            serde_json::to_value(ctx.filtered_tasks(&filter))?
        }

        Commands::Overdue => serde_json::to_value(ctx.overdue_tasks())?,

        Commands::Projects => serde_json::to_value(ctx.projects())?,

        Commands::Team => serde_json::to_value(ctx.team_member_view())?,
    };

    Ok(value)
}
