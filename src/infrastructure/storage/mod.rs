//! Storage infrastructure - catalog store implementations

mod factory;
mod in_memory;
mod postgres;

pub use factory::{StorageConfig, StorageFactory, StorageType};
pub use in_memory::InMemoryCatalogStore;
pub use postgres::{PostgresCatalogStore, PostgresConfig};
