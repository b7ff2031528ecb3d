//! Generic entity machinery shared by every managed record type.
//!
//! Each concrete screen of the dashboard manages one `Resource`
//! implementation; the controllers and the HTTP client are written once
//! against this module and instantiated per entity.

pub mod attachment;
pub mod field;
pub mod plan;

pub use attachment::Attachment;
pub use field::{FieldError, FieldKind, FieldSpec, FieldValue};
pub use plan::{FormPart, Method, PartValue, SaveBody, SavePlan};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A managed record type: one REST collection plus a static description
/// of its settable fields.
///
/// `fields()` lists exactly the fields a form may edit; server-assigned
/// fields (the id, creation timestamps) are excluded and therefore never
/// appear in an outgoing multipart body.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static
{
    /// Path segment under `/api/`, e.g. `ess`.
    const ENDPOINT: &'static str;
    /// Wire name of the server-assigned id, stripped from JSON bodies.
    const ID_FIELD: &'static str;
    /// Human-readable singular label for messages.
    const LABEL: &'static str;

    /// Server-assigned id; empty only for a not-yet-persisted draft.
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Static table of settable fields, in form order.
    fn fields() -> &'static [FieldSpec];

    /// Current value of a settable field. `None` for unknown fields and
    /// for optional fields that are unset (those are omitted from
    /// multipart bodies).
    fn get_field(&self, name: &str) -> Option<FieldValue>;

    /// Replace exactly one field with an already-typed value.
    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError>;

    /// True when any attachment field holds a not-yet-uploaded binary,
    /// which forces the multipart encoding on the next save.
    fn has_pending_attachment(&self) -> bool {
        Self::fields().iter().any(|spec| {
            matches!(
                self.get_field(spec.name),
                Some(FieldValue::Attachment(Attachment::Pending { .. }))
            )
        })
    }

    /// Multipart body: one part per settable field, the id never included.
    /// Stored attachments are sent as their URL, pending ones as file parts.
    fn form_parts(&self) -> Vec<FormPart> {
        let mut parts = Vec::new();
        for spec in Self::fields() {
            let Some(value) = self.get_field(spec.name) else {
                continue;
            };
            match value {
                FieldValue::Text(s) => parts.push(FormPart::text(spec.name, s)),
                FieldValue::Number(n) => parts.push(FormPart::text(spec.name, n.to_string())),
                FieldValue::Date(d) => {
                    parts.push(FormPart::text(spec.name, d.format("%Y-%m-%d").to_string()))
                }
                FieldValue::Attachment(Attachment::Stored(url)) => {
                    parts.push(FormPart::text(spec.name, url))
                }
                FieldValue::Attachment(Attachment::Empty) => {
                    parts.push(FormPart::text(spec.name, String::new()))
                }
                FieldValue::Attachment(Attachment::Pending {
                    file_name,
                    content_type,
                    bytes,
                }) => parts.push(FormPart::file(spec.name, file_name, content_type, bytes)),
            }
        }
        parts
    }

    /// JSON body: the full serialized record minus the id field.
    fn json_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        if let Some(map) = value.as_object_mut() {
            map.remove(Self::ID_FIELD);
        }
        Ok(value)
    }
}
