//! Login flow: the only place a token is obtained. Issuance is the
//! server's business; this client just stores what it is given.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::session::Session;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user: LoginUser,
}

#[derive(Deserialize)]
struct LoginUser {
    role: LoginRole,
}

#[derive(Deserialize)]
struct LoginRole {
    #[serde(rename = "roleName")]
    role_name: String,
}

/// POST /api/auth/login. On success returns the session to persist;
/// a 401 surfaces as `Unauthorized`, other non-2xx as the server's
/// `message` when present.
pub async fn login(username: &str, password: &str) -> Result<Session, ApiError> {
    let cfg = crate::config::config();
    let base = cfg.api.base()?;
    let url = base
        .join("api/auth/login")
        .map_err(|e| ApiError::Config(e.to_string()))?;

    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(cfg.api.timeout_secs))
        .build()?;

    let res = http
        .post(url)
        .json(&LoginRequest { username, password })
        .send()
        .await?;

    let status = res.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(ApiError::Unauthorized("login rejected".to_string()));
    }
    if !status.is_success() {
        if let Ok(body) = res.json::<serde_json::Value>().await {
            if let Some(message) = body.get("message").and_then(|m| m.as_str()) {
                return Err(ApiError::Validation {
                    message: message.to_string(),
                });
            }
        }
        return Err(ApiError::Server {
            status: status.as_u16(),
        });
    }

    let body: LoginResponse = res.json().await?;
    tracing::info!(role = %body.user.role.role_name, "login succeeded");

    Ok(Session {
        token: Some(body.token),
        role: Some(body.user.role.role_name),
    })
}
