pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};

use crate::models::{Candidate, Document, Employee, UserAccount};

#[derive(Parser)]
#[command(name = "hrdash")]
#[command(about = "hrdash - admin console for the HR dashboard API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Authentication and session management")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Self-service documents")]
    Document {
        #[command(subcommand)]
        cmd: commands::entity::EntityCommands,
    },

    #[command(about = "Hiring candidates")]
    Hiring {
        #[command(subcommand)]
        cmd: commands::entity::EntityCommands,
    },

    #[command(about = "Employee records")]
    Employee {
        #[command(subcommand)]
        cmd: commands::entity::EntityCommands,
    },

    #[command(about = "User accounts")]
    User {
        #[command(subcommand)]
        cmd: commands::entity::EntityCommands,
    },

    #[command(about = "Show menu entries visible to the stored role")]
    Routes,

    #[command(about = "Hiring summary for the admin landing view")]
    Dashboard,
}

#[derive(Debug, Clone)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format).await,
        Commands::Document { cmd } => {
            commands::entity::handle::<Document>(cmd, output_format).await
        }
        Commands::Hiring { cmd } => {
            commands::entity::handle::<Candidate>(cmd, output_format).await
        }
        Commands::Employee { cmd } => {
            commands::entity::handle::<Employee>(cmd, output_format).await
        }
        Commands::User { cmd } => {
            commands::entity::handle::<UserAccount>(cmd, output_format).await
        }
        Commands::Routes => commands::routes::handle(output_format),
        Commands::Dashboard => commands::dashboard::handle(output_format).await,
    }
}
