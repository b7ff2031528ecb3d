use serde_json::json;

use crate::cli::utils::clear_rejected_session;
use crate::cli::OutputFormat;
use crate::client::HttpResourceClient;
use crate::controller::{ListController, LoadState, Signal};
use crate::dashboard::hiring_summary;
use crate::models::Candidate;
use crate::session::SessionStore;

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let mut store = SessionStore::open()?;
    let client = HttpResourceClient::<Candidate>::from_config()?;

    let mut controller = ListController::new();
    if controller.load(store.session(), &client).await == Signal::RedirectToLogin {
        anyhow::bail!("not logged in; run `hrdash auth login`");
    }
    if let LoadState::Failed(e) = controller.state() {
        clear_rejected_session(&mut store, e)?;
        anyhow::bail!("{e}");
    }

    let summary = hiring_summary(controller.items());

    match output_format {
        OutputFormat::Json => {
            let by_position: Vec<_> = summary
                .by_position
                .iter()
                .map(|(position, count)| json!({ "position": position, "count": count }))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "total_applicants": summary.total,
                    "by_position": by_position,
                }))?
            );
        }
        OutputFormat::Text => {
            println!("Total applicants: {}", summary.total);
            for (position, count) in &summary.by_position {
                println!("{:<32} {}", position, count);
            }
        }
    }
    Ok(())
}
