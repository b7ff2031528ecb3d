// Client-side failure taxonomy for the HR dashboard API.
use thiserror::Error;

/// Errors surfaced by the resource client and controllers.
///
/// Policy: no call is ever retried automatically. Every failure propagates
/// to the immediate caller, which either blocks the initial render
/// (`Failed` page state) or shows a dismissable notification.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No token in the session store. Caller must redirect to login
    /// before attempting any network work.
    #[error("not authenticated; login required")]
    Unauthenticated,

    /// The server rejected the token or the permissions (HTTP 401/403).
    /// Same redirect policy as `Unauthenticated`.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A submit arrived while this form's save was still in flight.
    #[error("a save is already in progress")]
    Busy,

    /// Non-2xx response whose JSON body carried a `message` field.
    /// The message is shown to the user verbatim.
    #[error("{message}")]
    Validation { message: String },

    /// Network/connectivity failure before a response arrived.
    #[error("network failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response without a usable message body.
    #[error("server error: status {status}")]
    Server { status: u16 },

    /// Save rejected without a server-supplied reason.
    #[error("failed to save {label}")]
    SaveFailed { label: &'static str },

    /// Delete rejected (any non-2xx).
    #[error("failed to delete {label}")]
    DeleteFailed { label: &'static str },

    /// Payload could not be encoded before sending.
    #[error("encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// Bad process configuration (e.g. malformed base URL).
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether the caller should redirect to the login route.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::Unauthenticated | ApiError::Unauthorized(_))
    }
}
