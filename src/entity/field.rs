use chrono::NaiveDate;
use thiserror::Error;

use super::attachment::Attachment;

/// Static description of one settable field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire name, also used as the multipart part name.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    /// Numeric input; accepted as text, stored as a number.
    Number,
    /// ISO date input (`YYYY-MM-DD`), stored as a date value.
    Date,
    /// File field; set through a selected local binary, not text.
    Attachment,
    /// Text restricted to a fixed option set.
    Select(&'static [&'static str]),
    /// Free text that must not be echoed back in summaries.
    Secret,
}

/// A typed field value, produced by parsing raw form input.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
    Date(NaiveDate),
    Attachment(Attachment),
}

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field {field}: '{value}' is not a number")]
    InvalidNumber { field: String, value: String },

    #[error("field {field}: '{value}' is not an ISO date (expected YYYY-MM-DD)")]
    InvalidDate { field: String, value: String },

    #[error("field {field}: '{value}' is not one of the allowed options")]
    InvalidOption { field: String, value: String },

    #[error("field {field} is a file field; attach a file instead of text")]
    NotTextual { field: String },

    #[error("field {field} does not accept that value kind")]
    KindMismatch { field: String },
}

impl FieldKind {
    /// Parse raw textual input into the typed value this kind stores.
    pub fn parse(&self, field: &str, raw: &str) -> Result<FieldValue, FieldError> {
        match self {
            FieldKind::Text | FieldKind::Secret => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Number => raw
                .trim()
                .parse::<i64>()
                .map(FieldValue::Number)
                .map_err(|_| FieldError::InvalidNumber {
                    field: field.to_string(),
                    value: raw.to_string(),
                }),
            FieldKind::Date => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map(FieldValue::Date)
                .map_err(|_| FieldError::InvalidDate {
                    field: field.to_string(),
                    value: raw.to_string(),
                }),
            FieldKind::Select(options) => {
                if options.contains(&raw) {
                    Ok(FieldValue::Text(raw.to_string()))
                } else {
                    Err(FieldError::InvalidOption {
                        field: field.to_string(),
                        value: raw.to_string(),
                    })
                }
            }
            FieldKind::Attachment => Err(FieldError::NotTextual {
                field: field.to_string(),
            }),
        }
    }
}

impl FieldValue {
    /// Ordering used by the list controller's sort views. Values of
    /// different kinds compare equal rather than panicking.
    pub fn compare(&self, other: &FieldValue) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Attachment(a), FieldValue::Attachment(b)) => {
                a.url().unwrap_or("").cmp(b.url().unwrap_or(""))
            }
            _ => Ordering::Equal,
        }
    }

    /// Text used by the case-insensitive list filter. Secrets and pending
    /// binaries contribute nothing.
    pub fn filter_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            FieldValue::Attachment(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert!(matches!(
            FieldKind::Date.parse("tanggal_join", "2024-03-01"),
            Ok(FieldValue::Date(_))
        ));
        assert!(matches!(
            FieldKind::Date.parse("tanggal_join", "03/01/2024"),
            Err(FieldError::InvalidDate { .. })
        ));
    }

    #[test]
    fn select_rejects_unknown_options() {
        const OPTIONS: &[&str] = &["Laki-laki", "Perempuan"];
        assert!(FieldKind::Select(OPTIONS).parse("gender", "Laki-laki").is_ok());
        assert!(matches!(
            FieldKind::Select(OPTIONS).parse("gender", "other"),
            Err(FieldError::InvalidOption { .. })
        ));
    }

    #[test]
    fn number_accepts_text_input() {
        assert_eq!(
            FieldKind::Number.parse("no_telfon", " 81234567 ").unwrap(),
            FieldValue::Number(81234567)
        );
    }
}
