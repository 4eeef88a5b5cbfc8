//! Course Catalog API
//!
//! A key-gated REST service for course records with:
//! - Create, read, update and delete of courses keyed by course ID
//! - API key validation against the catalog store
//! - In-memory or PostgreSQL persistence

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::storage::CatalogStore;
use infrastructure::{
    api_key::{ApiKeyService, StorageApiKeyRepository},
    course::{CourseService, StorageCourseRepository},
    storage::StorageFactory,
};

/// Create application state from explicit configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = config.storage_config()?;
    let store = StorageFactory::create(&storage_config).await?;

    Ok(build_app_state(store))
}

/// Wire repositories and services over a catalog store
pub fn build_app_state(store: Arc<dyn CatalogStore>) -> AppState {
    let course_repository = Arc::new(StorageCourseRepository::new(store.clone()));
    let api_key_repository = Arc::new(StorageApiKeyRepository::new(store.clone()));

    AppState {
        course_service: Arc::new(CourseService::new(course_repository)),
        api_key_service: Arc::new(ApiKeyService::new(api_key_repository)),
        store,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageSection;

    #[tokio::test]
    async fn test_create_app_state_with_memory_backend() {
        let config = AppConfig {
            storage: StorageSection {
                backend: "memory".to_string(),
                memory_api_keys: vec!["k1".to_string()],
            },
            ..AppConfig::default()
        };

        let state = create_app_state_with_config(&config).await.unwrap();

        assert!(state.api_key_service.validate("k1").await.unwrap());
        assert!(!state.api_key_service.validate("k2").await.unwrap());
        assert!(state.course_service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_backend_is_rejected() {
        let config = AppConfig {
            storage: StorageSection {
                backend: "cassandra".to_string(),
                memory_api_keys: Vec::new(),
            },
            ..AppConfig::default()
        };

        assert!(create_app_state_with_config(&config).await.is_err());
    }
}
