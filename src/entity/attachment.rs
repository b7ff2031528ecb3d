use serde::{Deserialize, Serialize};

/// A file-typed entity field.
///
/// Holds either the URL of an already-stored file or a locally selected
/// binary pending upload on the next save, never both. On the wire the
/// field is a plain string: the stored URL, or empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Attachment {
    #[default]
    Empty,
    /// Already uploaded; the server-side URL.
    Stored(String),
    /// Selected locally, uploaded as a multipart file part on save.
    Pending {
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

impl Attachment {
    pub fn pending(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Attachment::Pending {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Attachment::Pending { .. })
    }

    /// Stored URL, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            Attachment::Stored(url) => Some(url),
            _ => None,
        }
    }
}

impl From<String> for Attachment {
    fn from(s: String) -> Self {
        if s.is_empty() {
            Attachment::Empty
        } else {
            Attachment::Stored(s)
        }
    }
}

impl From<Attachment> for String {
    fn from(a: Attachment) -> String {
        match a {
            Attachment::Stored(url) => url,
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_round_trip() {
        let stored: Attachment = serde_json::from_str("\"https://files/x.pdf\"").unwrap();
        assert_eq!(stored.url(), Some("https://files/x.pdf"));

        let empty: Attachment = serde_json::from_str("\"\"").unwrap();
        assert_eq!(empty, Attachment::Empty);
    }

    #[test]
    fn pending_serializes_as_empty_string() {
        // A pending binary never leaks into a JSON body.
        let pending = Attachment::pending("cv.pdf", "application/pdf", vec![1, 2, 3]);
        assert_eq!(serde_json::to_string(&pending).unwrap(), "\"\"");
    }
}
