//! Store factory for runtime backend selection

use std::sync::Arc;

use tracing::info;

use crate::domain::storage::CatalogStore;
use crate::domain::DomainError;

use super::in_memory::InMemoryCatalogStore;
use super::postgres::{PostgresCatalogStore, PostgresConfig};

/// Supported storage types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage seeded with accepted keys
    InMemory { api_keys: Vec<String> },
    /// PostgreSQL storage configuration
    Postgres {
        config: PostgresConfig,
        ensure_schema: bool,
    },
}

/// Factory for creating catalog stores
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates a store based on the configuration
    pub async fn create(config: &StorageConfig) -> Result<Arc<dyn CatalogStore>, DomainError> {
        match config {
            StorageConfig::InMemory { api_keys } => {
                info!(keys = api_keys.len(), "Using in-memory catalog store");
                Ok(Arc::new(InMemoryCatalogStore::with_api_keys(
                    api_keys.iter().cloned(),
                )))
            }
            StorageConfig::Postgres {
                config,
                ensure_schema,
            } => {
                let store = PostgresCatalogStore::connect(config).await?;

                if *ensure_schema {
                    store.ensure_schema().await?;
                }

                info!("PostgreSQL catalog store ready");
                Ok(Arc::new(store))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!(StorageType::from_str("memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("In-Memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("postgres"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("PG"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("mysql"), None);
    }

    #[tokio::test]
    async fn test_create_in_memory_store() {
        let config = StorageConfig::InMemory {
            api_keys: vec!["k1".to_string()],
        };

        let store = StorageFactory::create(&config).await.unwrap();
        assert!(store.ping().await.is_ok());
    }
}
