//! API Key service
//!
//! Validates caller-supplied keys against the provisioned key table.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::api_key::{ApiKeyId, ApiKeyRepository};
use crate::domain::DomainError;

/// API Key service backing the authorization gate
#[derive(Debug)]
pub struct ApiKeyService<R>
where
    R: ApiKeyRepository,
{
    repository: Arc<R>,
}

impl<R: ApiKeyRepository> ApiKeyService<R> {
    /// Create a new API key service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Check a raw key value
    ///
    /// Blank keys and keys with control characters are rejected without a
    /// store lookup. Storage failures are
    /// returned as errors, never as `false`.
    pub async fn validate(&self, raw: &str) -> Result<bool, DomainError> {
        let Some(key) = ApiKeyId::parse(raw) else {
            debug!("Rejecting blank or malformed API key");
            return Ok(false);
        };

        let valid = self.repository.exists(&key).await?;

        if !valid {
            warn!(key_prefix = %key.prefix(), "Unknown API key");
        }

        Ok(valid)
    }
}
