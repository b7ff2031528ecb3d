use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::entity::{Attachment, FieldKind, FieldValue, Resource};
use crate::error::ApiError;
use crate::session::SessionStore;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(data_value) = data {
                response["data"] = data_value;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(output_format: &OutputFormat, message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "success": false,
                "error": message
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// A 401/403 means the server no longer honors the stored token, so the
/// session is cleared; the next command starts from login instead of
/// replaying a dead token.
pub fn clear_rejected_session(store: &mut SessionStore, err: &ApiError) -> anyhow::Result<()> {
    if err.requires_login() {
        tracing::info!("server rejected the stored token, clearing session");
        store.clear()?;
    }
    Ok(())
}

/// One-line text rendering of a record: id plus each visible field.
/// Secrets are masked; attachments show their URL or upload state.
pub fn summarize<T: Resource>(entity: &T) -> String {
    let mut parts = vec![format!("id={}", entity.id())];
    for spec in T::fields() {
        if spec.kind == FieldKind::Secret {
            continue;
        }
        let rendered = match entity.get_field(spec.name) {
            Some(FieldValue::Text(s)) => s,
            Some(FieldValue::Number(n)) => n.to_string(),
            Some(FieldValue::Date(d)) => d.format("%Y-%m-%d").to_string(),
            Some(FieldValue::Attachment(Attachment::Stored(url))) => url,
            Some(FieldValue::Attachment(Attachment::Pending { file_name, .. })) => {
                format!("(pending upload: {file_name})")
            }
            Some(FieldValue::Attachment(Attachment::Empty)) => "-".to_string(),
            None => "-".to_string(),
        };
        parts.push(format!("{}={}", spec.name, rendered));
    }
    parts.join("  ")
}
