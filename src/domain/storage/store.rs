//! Catalog store trait definition

use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[cfg(test)]
use mockall::automock;

use crate::domain::api_key::ApiKeyId;
use crate::domain::course::{Course, CourseId};
use crate::domain::DomainError;

/// Raw statement execution against the catalog tables
///
/// Mutations report affected row counts so callers can detect conflicts and
/// missing rows without a separate existence check. Driver failures surface
/// as [`DomainError::Storage`] and never as an empty result.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Inserts a course row; returns 0 when the ID is already taken
    async fn insert_course(&self, course: &Course) -> Result<u64, DomainError>;

    /// Sets the title and modification time of an existing row
    async fn update_course(
        &self,
        id: &CourseId,
        title: &str,
        modified_at: DateTime<Utc>,
    ) -> Result<u64, DomainError>;

    /// Deletes a course row
    async fn delete_course(&self, id: &CourseId) -> Result<u64, DomainError>;

    /// Selects at most one course row
    async fn select_course(&self, id: &CourseId) -> Result<Option<Course>, DomainError>;

    /// Selects every course row ordered by ID
    async fn select_courses(&self) -> Result<Vec<Course>, DomainError>;

    /// Looks up a key row
    async fn select_api_key(&self, key: &ApiKeyId) -> Result<bool, DomainError>;

    /// Round-trips to the backend
    async fn ping(&self) -> Result<(), DomainError>;
}
