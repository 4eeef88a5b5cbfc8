//! Storage domain - persistence contract shared by all backends

mod store;

pub use store::CatalogStore;

#[cfg(test)]
pub use store::MockCatalogStore;
