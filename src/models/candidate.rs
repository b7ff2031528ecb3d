use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::{Attachment, FieldError, FieldKind, FieldSpec, FieldValue, Resource};

const INTERVIEW_RESULTS: &[&str] = &["Passed", "Failed", "Pending"];

/// Hiring candidate, `/api/hiring`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "hiringId", default)]
    pub hiring_id: String,
    #[serde(default)]
    pub nama_kandidat: String,
    #[serde(default)]
    pub posisi_yang_dilamar: String,
    #[serde(default, with = "super::wire_date")]
    pub tanggal_interview: Option<NaiveDate>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub hasil_interview: String,
    #[serde(default)]
    pub lampiran_cv: Attachment,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "nama_kandidat",
        label: "Nama Kandidat",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "posisi_yang_dilamar",
        label: "Posisi Yang Dilamar",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "tanggal_interview",
        label: "Tanggal Interview",
        kind: FieldKind::Date,
    },
    FieldSpec {
        name: "summary",
        label: "Summary",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "hasil_interview",
        label: "Hasil Interview",
        kind: FieldKind::Select(INTERVIEW_RESULTS),
    },
    FieldSpec {
        name: "lampiran_cv",
        label: "Lampiran CV",
        kind: FieldKind::Attachment,
    },
];

impl Resource for Candidate {
    const ENDPOINT: &'static str = "hiring";
    const ID_FIELD: &'static str = "hiringId";
    const LABEL: &'static str = "hiring candidate";

    fn id(&self) -> &str {
        &self.hiring_id
    }

    fn set_id(&mut self, id: String) {
        self.hiring_id = id;
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "nama_kandidat" => Some(FieldValue::Text(self.nama_kandidat.clone())),
            "posisi_yang_dilamar" => Some(FieldValue::Text(self.posisi_yang_dilamar.clone())),
            "tanggal_interview" => self.tanggal_interview.map(FieldValue::Date),
            "summary" => Some(FieldValue::Text(self.summary.clone())),
            "hasil_interview" => Some(FieldValue::Text(self.hasil_interview.clone())),
            "lampiran_cv" => Some(FieldValue::Attachment(self.lampiran_cv.clone())),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match (name, value) {
            ("nama_kandidat", FieldValue::Text(v)) => self.nama_kandidat = v,
            ("posisi_yang_dilamar", FieldValue::Text(v)) => self.posisi_yang_dilamar = v,
            ("tanggal_interview", FieldValue::Date(d)) => self.tanggal_interview = Some(d),
            ("summary", FieldValue::Text(v)) => self.summary = v,
            ("hasil_interview", FieldValue::Text(v)) => self.hasil_interview = v,
            ("lampiran_cv", FieldValue::Attachment(a)) => self.lampiran_cv = a,
            (
                "nama_kandidat" | "posisi_yang_dilamar" | "tanggal_interview" | "summary"
                | "hasil_interview" | "lampiran_cv",
                _,
            ) => {
                return Err(FieldError::KindMismatch {
                    field: name.to_string(),
                })
            }
            _ => return Err(FieldError::UnknownField(name.to_string())),
        }
        Ok(())
    }
}
