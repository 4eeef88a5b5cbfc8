//! Storage-backed API key repository implementation

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::api_key::{ApiKeyId, ApiKeyRepository};
use crate::domain::storage::CatalogStore;
use crate::domain::DomainError;

/// Storage-backed implementation of ApiKeyRepository
pub struct StorageApiKeyRepository {
    store: Arc<dyn CatalogStore>,
}

impl StorageApiKeyRepository {
    /// Create a new storage-backed repository
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

impl Debug for StorageApiKeyRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageApiKeyRepository").finish_non_exhaustive()
    }
}

#[async_trait]
impl ApiKeyRepository for StorageApiKeyRepository {
    async fn exists(&self, key: &ApiKeyId) -> Result<bool, DomainError> {
        self.store.select_api_key(key).await
    }
}
