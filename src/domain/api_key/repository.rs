//! API key repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::ApiKeyId;
use crate::domain::DomainError;

/// Read-only lookup of pre-provisioned keys
#[async_trait]
pub trait ApiKeyRepository: Send + Sync + Debug {
    /// True iff a key row with this value exists
    async fn exists(&self, key: &ApiKeyId) -> Result<bool, DomainError>;
}
