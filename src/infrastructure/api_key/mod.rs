//! API Key infrastructure implementations

mod service;
mod storage_repository;

pub use service::ApiKeyService;
pub use storage_repository::StorageApiKeyRepository;
