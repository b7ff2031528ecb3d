//! Resource client: per-entity-type HTTP access to the remote API.
//!
//! Controllers talk to the `ResourceGateway` trait, never to reqwest
//! directly; `HttpResourceClient` is the production implementation and
//! tests substitute recording fakes.

pub mod auth;
pub mod http;

pub use http::HttpResourceClient;

use async_trait::async_trait;

use crate::entity::Resource;
use crate::error::ApiError;

/// One contract for every entity type: list, save (create or update),
/// remove. All calls carry the bearer token; none are retried.
#[async_trait]
pub trait ResourceGateway<T: Resource>: Send + Sync {
    async fn list(&self, token: &str) -> Result<Vec<T>, ApiError>;

    /// Create (`is_update == false`) or update. Returns the server's
    /// canonical representation, id and timestamps included.
    async fn save(&self, token: &str, entity: &T, is_update: bool) -> Result<T, ApiError>;

    async fn remove(&self, token: &str, id: &str) -> Result<(), ApiError>;
}
