use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{output_error, output_success};
use crate::cli::OutputFormat;
use crate::client::auth;
use crate::nav;
use crate::session::SessionStore;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Login and store the session")]
    Login {
        #[arg(help = "Username")]
        username: String,
        #[arg(long, help = "Password (read from stdin if not provided)")]
        password: Option<String>,
    },

    #[command(about = "Clear the stored session")]
    Logout,

    #[command(about = "Show current session status")]
    Status,
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { username, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt_password()?,
            };

            let session = auth::login(&username, &password).await?;
            let (Some(token), Some(role)) = (session.token, session.role) else {
                anyhow::bail!("login response missing token or role");
            };

            let mut store = SessionStore::open()?;
            store.set(token, role.clone())?;

            let landing = nav::landing_route(&role);
            output_success(
                &output_format,
                &format!("logged in as {} ({})", username, role),
                Some(json!({ "role": role, "landing": landing })),
            )
        }
        AuthCommands::Logout => {
            let mut store = SessionStore::open()?;
            store.clear()?;
            output_success(&output_format, "session cleared", None)
        }
        AuthCommands::Status => {
            let store = SessionStore::open()?;
            match (store.token(), store.role()) {
                (Some(_), Some(role)) => output_success(
                    &output_format,
                    &format!("logged in ({})", role),
                    Some(json!({ "role": role })),
                ),
                _ => output_error(&output_format, "not logged in"),
            }
        }
    }
}

fn prompt_password() -> anyhow::Result<String> {
    use std::io::{self, BufRead, Write};

    print!("Password: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}
