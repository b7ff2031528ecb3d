use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Attachment, FieldError, FieldKind, FieldSpec, FieldValue, Resource};

/// Employee self-service document, `/api/ess`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "essId", default)]
    pub ess_id: String,
    #[serde(default)]
    pub nama_dokumen: String,
    #[serde(default)]
    pub lampiran: Attachment,
    /// Server-assigned; never sent in form bodies.
    #[serde(default)]
    pub create_at: Option<DateTime<Utc>>,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "nama_dokumen",
        label: "Nama Dokumen",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "lampiran",
        label: "Lampiran",
        kind: FieldKind::Attachment,
    },
];

impl Resource for Document {
    const ENDPOINT: &'static str = "ess";
    const ID_FIELD: &'static str = "essId";
    const LABEL: &'static str = "document";

    fn id(&self) -> &str {
        &self.ess_id
    }

    fn set_id(&mut self, id: String) {
        self.ess_id = id;
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "nama_dokumen" => Some(FieldValue::Text(self.nama_dokumen.clone())),
            "lampiran" => Some(FieldValue::Attachment(self.lampiran.clone())),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match (name, value) {
            ("nama_dokumen", FieldValue::Text(v)) => self.nama_dokumen = v,
            ("lampiran", FieldValue::Attachment(a)) => self.lampiran = a,
            ("nama_dokumen" | "lampiran", _) => {
                return Err(FieldError::KindMismatch {
                    field: name.to_string(),
                })
            }
            _ => return Err(FieldError::UnknownField(name.to_string())),
        }
        Ok(())
    }
}
