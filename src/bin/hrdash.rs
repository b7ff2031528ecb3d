use clap::Parser;
use hrdash::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up HRDASH_API_URL and friends from a local .env if present.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = hrdash::cli::run(cli).await {
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
