//! Course repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Course, CourseId};
use crate::domain::DomainError;

/// Typed CRUD boundary for courses
///
/// Mutations are atomic: `add` reports `Conflict` from the insert itself and
/// `update`/`delete` report `NotFound` when no row was affected.
#[async_trait]
pub trait CourseRepository: Send + Sync + Debug {
    /// Get a course by ID; absence is not an error
    async fn get(&self, id: &CourseId) -> Result<Option<Course>, DomainError>;

    /// List every course, empty when the catalog is empty
    async fn list(&self) -> Result<Vec<Course>, DomainError>;

    /// Insert a new course with both timestamps set to now
    async fn add(&self, id: CourseId, title: &str) -> Result<Course, DomainError>;

    /// Change the title and refresh the modification timestamp
    async fn update(&self, id: &CourseId, title: &str) -> Result<(), DomainError>;

    /// Remove the course row
    async fn delete(&self, id: &CourseId) -> Result<(), DomainError>;
}
