use serde_json::json;

use crate::cli::utils::output_error;
use crate::cli::OutputFormat;
use crate::nav;
use crate::session::SessionStore;

pub fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let store = SessionStore::open()?;
    let routes = nav::visible_routes(store.role());

    if routes.is_empty() {
        return output_error(&output_format, "no visible routes; login first");
    }

    match output_format {
        OutputFormat::Json => {
            let entries: Vec<_> = routes
                .iter()
                .map(|r| json!({ "label": r.label, "path": r.path, "icon": r.icon }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Text => {
            for route in routes {
                println!("{:<24} {}", route.label, route.path);
            }
        }
    }
    Ok(())
}
