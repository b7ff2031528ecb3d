//! Pure request planning for saves.
//!
//! The encoding is derived from the payload shape: a draft carrying any
//! pending binary goes out as multipart form data, everything else as
//! JSON. No per-entity flag is involved, so attachment-bearing and plain
//! entities share one contract.

use super::Resource;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    Post,
    Put,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub name: &'static str,
    pub value: PartValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartValue {
    Text(String),
    File {
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    pub fn text(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: PartValue::Text(value.into()),
        }
    }

    pub fn file(
        name: &'static str,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name,
            value: PartValue::File {
                file_name,
                content_type,
                bytes,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveBody {
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

/// Fully planned save request: method, path under the API origin, body.
#[derive(Debug, Clone, PartialEq)]
pub struct SavePlan {
    pub method: Method,
    pub path: String,
    pub body: SaveBody,
}

impl SavePlan {
    /// Plan the save for a draft. POST to the collection for a create,
    /// PUT with the id in the path for an update; the id never appears
    /// in the body either way.
    pub fn build<T: Resource>(entity: &T, is_update: bool) -> Result<Self, ApiError> {
        let (method, path) = if is_update {
            (Method::Put, format!("/api/{}/{}", T::ENDPOINT, entity.id()))
        } else {
            (Method::Post, format!("/api/{}", T::ENDPOINT))
        };

        let body = if entity.has_pending_attachment() {
            SaveBody::Multipart(entity.form_parts())
        } else {
            SaveBody::Json(entity.json_body()?)
        };

        Ok(Self { method, path, body })
    }
}
