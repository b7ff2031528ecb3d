//! Client-held session: bearer token plus role name, persisted across runs.
//!
//! The session file is the sole client-side authorization gate. Any
//! component that finds no token must redirect to login before doing any
//! network work; the server remains the authoritative check.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Token or the redirect-to-login error.
    pub fn require_token(&self) -> Result<&str, ApiError> {
        self.token.as_deref().ok_or(ApiError::Unauthenticated)
    }
}

/// Durable store backing the session, one JSON file under the config dir.
pub struct SessionStore {
    path: PathBuf,
    session: Session,
}

impl SessionStore {
    /// Open the store at the default config directory
    /// (`$HRDASH_CONFIG_DIR`, else `$HOME/.config/hrdash/cli`).
    pub fn open() -> anyhow::Result<Self> {
        Self::open_at(&config_dir()?)
    }

    /// Open the store under an explicit directory.
    pub fn open_at(dir: &Path) -> anyhow::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join("session.json");

        let session = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            Session::default()
        };

        Ok(Self { path, session })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn role(&self) -> Option<&str> {
        self.session.role()
    }

    /// Populate the session after a successful login and persist it.
    pub fn set(&mut self, token: String, role: String) -> anyhow::Result<()> {
        self.session.token = Some(token);
        self.session.role = Some(role);
        self.persist()
    }

    /// Destroy the session (logout, or a 401 from any call).
    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.session = Session::default();
        self.persist()
    }

    fn persist(&self) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(&self.session)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

fn config_dir() -> anyhow::Result<PathBuf> {
    let dir = if let Ok(custom) = std::env::var("HRDASH_CONFIG_DIR") {
        PathBuf::from(custom)
    } else {
        let home = std::env::var("HOME")
            .map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
        PathBuf::from(home).join(".config").join("hrdash").join("cli")
    };

    Ok(dir)
}
