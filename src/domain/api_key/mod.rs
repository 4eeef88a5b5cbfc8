//! API Key domain
//!
//! Keys are provisioned out of band; this system only looks them up.

mod entity;
mod repository;

pub use entity::ApiKeyId;
pub use repository::ApiKeyRepository;
