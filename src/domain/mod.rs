//! Domain layer - Core entities, contracts and errors

pub mod api_key;
pub mod course;
pub mod error;
pub mod storage;

pub use api_key::{ApiKeyId, ApiKeyRepository};
pub use course::{Course, CourseId, CourseRepository, CourseValidationError};
pub use error::DomainError;
pub use storage::CatalogStore;
