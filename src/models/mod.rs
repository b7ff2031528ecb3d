//! Concrete entity shapes managed by the dashboard.
//!
//! Wire field names follow the remote API exactly (a mix of Indonesian
//! and camelCase identifiers), mapped to Rust names via serde renames.

pub mod candidate;
pub mod document;
pub mod employee;
pub mod user;

pub use candidate::Candidate;
pub use document::Document;
pub use employee::Employee;
pub use user::UserAccount;

/// Serde helper for optional date fields.
///
/// The API stores dates as full ISO timestamps but forms edit them as
/// plain `YYYY-MM-DD` strings, so deserialization accepts both.
pub(crate) mod wire_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.is_empty() => Ok(None),
            Some(s) => {
                if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
                    return Ok(Some(date));
                }
                if let Ok(ts) = DateTime::parse_from_rfc3339(&s) {
                    return Ok(Some(ts.date_naive()));
                }
                Err(serde::de::Error::custom(format!("invalid date: {s}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Resource;

    #[test]
    fn document_deserializes_from_api_shape() {
        let doc: Document = serde_json::from_str(
            r#"{"essId":"e1","nama_dokumen":"Kontrak A","lampiran":"","create_at":"2024-01-05T08:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(doc.id(), "e1");
        assert_eq!(doc.nama_dokumen, "Kontrak A");
        assert!(doc.create_at.is_some());
    }

    #[test]
    fn candidate_accepts_timestamp_dates() {
        let candidate: Candidate = serde_json::from_str(
            r#"{"hiringId":"h1","nama_kandidat":"Budi","posisi_yang_dilamar":"Backend",
                "tanggal_interview":"2024-06-10T00:00:00.000Z","summary":"ok",
                "hasil_interview":"Passed","lampiran_cv":"https://files/cv.pdf"}"#,
        )
        .unwrap();
        assert_eq!(
            candidate.tanggal_interview.unwrap().to_string(),
            "2024-06-10"
        );
        assert_eq!(candidate.lampiran_cv.url(), Some("https://files/cv.pdf"));
    }

    #[test]
    fn user_wire_shape_keeps_nested_role() {
        let user: UserAccount = serde_json::from_str(
            r#"{"userId":"u1","username":"admin","email":"a@b.c","role":{"roleName":"Administrator"}}"#,
        )
        .unwrap();
        assert_eq!(user.role.role_name, "Administrator");

        let body = user.json_body().unwrap();
        assert!(body.get("userId").is_none());
        assert_eq!(body["role"]["roleName"], "Administrator");
    }
}
