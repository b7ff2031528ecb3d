use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::{Response, StatusCode};
use url::Url;

use super::ResourceGateway;
use crate::entity::{Method, PartValue, Resource, SaveBody, SavePlan};
use crate::error::ApiError;

/// reqwest-backed gateway for one entity type.
pub struct HttpResourceClient<T> {
    http: reqwest::Client,
    base: Url,
    _marker: PhantomData<T>,
}

impl<T: Resource> HttpResourceClient<T> {
    pub fn new(http: reqwest::Client, base: Url) -> Self {
        Self {
            http,
            base,
            _marker: PhantomData,
        }
    }

    /// Build a client from the process configuration.
    pub fn from_config() -> Result<Self, ApiError> {
        let cfg = crate::config::config();
        let base = cfg.api.base()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.api.timeout_secs))
            .build()?;
        Ok(Self::new(http, base))
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Config(format!("invalid request path '{path}': {e}")))
    }

    fn collection_path() -> String {
        format!("/api/{}", T::ENDPOINT)
    }
}

#[async_trait]
impl<T: Resource> ResourceGateway<T> for HttpResourceClient<T> {
    async fn list(&self, token: &str) -> Result<Vec<T>, ApiError> {
        let url = self.url(&Self::collection_path())?;
        tracing::debug!(entity = T::LABEL, %url, "listing");

        let res = self.http.get(url).bearer_auth(token).send().await?;
        let res = check_auth(res)?;

        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
            });
        }
        Ok(res.json().await?)
    }

    async fn save(&self, token: &str, entity: &T, is_update: bool) -> Result<T, ApiError> {
        let plan = SavePlan::build(entity, is_update)?;
        let url = self.url(&plan.path)?;
        tracing::debug!(entity = T::LABEL, %url, update = is_update, "saving");

        let req = match plan.method {
            Method::Post => self.http.post(url),
            Method::Put => self.http.put(url),
        }
        .bearer_auth(token);

        let res = match plan.body {
            SaveBody::Json(body) => req.json(&body).send().await?,
            SaveBody::Multipart(parts) => {
                let mut form = multipart::Form::new();
                for part in parts {
                    form = match part.value {
                        PartValue::Text(text) => form.text(part.name, text),
                        PartValue::File {
                            file_name,
                            content_type,
                            bytes,
                        } => form.part(
                            part.name,
                            multipart::Part::bytes(bytes)
                                .file_name(file_name)
                                .mime_str(&content_type)?,
                        ),
                    };
                }
                req.multipart(form).send().await?
            }
        };
        let res = check_auth(res)?;

        let status = res.status();
        if !status.is_success() {
            // Surface the server's reason verbatim when it sends one.
            if let Ok(body) = res.json::<serde_json::Value>().await {
                if let Some(message) = body.get("message").and_then(|m| m.as_str()) {
                    return Err(ApiError::Validation {
                        message: message.to_string(),
                    });
                }
            }
            return Err(ApiError::SaveFailed { label: T::LABEL });
        }
        Ok(res.json().await?)
    }

    async fn remove(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/{}", Self::collection_path(), id))?;
        tracing::debug!(entity = T::LABEL, %url, "deleting");

        let res = self.http.delete(url).bearer_auth(token).send().await?;
        let res = check_auth(res)?;

        if !res.status().is_success() {
            return Err(ApiError::DeleteFailed { label: T::LABEL });
        }
        Ok(())
    }
}

/// Map 401/403 to the redirect-to-login error, pass everything else on.
fn check_auth(res: Response) -> Result<Response, ApiError> {
    match res.status() {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized(format!(
            "server rejected credentials ({})",
            res.status()
        ))),
        _ => Ok(res),
    }
}
