//! Course service for catalog management

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::course::{validate_title, Course, CourseId, CourseRepository};
use crate::domain::DomainError;

/// Request for creating a new course
#[derive(Debug, Clone)]
pub struct CreateCourseRequest {
    pub id: String,
    pub title: String,
}

/// Request for updating a course
#[derive(Debug, Clone)]
pub struct UpdateCourseRequest {
    pub title: String,
}

/// Course service for managing the catalog
///
/// Only creation assigns an identifier, so only creation rejects a malformed
/// one. Lookups and mutations treat a malformed ID as an absent course.
#[derive(Debug)]
pub struct CourseService<R: CourseRepository> {
    repository: Arc<R>,
}

impl<R: CourseRepository> CourseService<R> {
    /// Create a new course service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new course
    pub async fn create(&self, request: CreateCourseRequest) -> Result<Course, DomainError> {
        let course_id = parse_id(&request.id)?;
        let title =
            validate_title(&request.title).map_err(|e| DomainError::validation(e.to_string()))?;

        let course = self.repository.add(course_id, title).await?;

        info!(course_id = %course.id(), "Course created");
        Ok(course)
    }

    /// Get a course by ID
    pub async fn get(&self, id: &str) -> Result<Option<Course>, DomainError> {
        match CourseId::new(id) {
            Ok(course_id) => self.repository.get(&course_id).await,
            Err(e) => {
                debug!(course_id = %id, error = %e, "Lookup with malformed course ID");
                Ok(None)
            }
        }
    }

    /// List all courses
    pub async fn list(&self) -> Result<Vec<Course>, DomainError> {
        self.repository.list().await
    }

    /// Update the title of an existing course
    pub async fn update(&self, id: &str, request: UpdateCourseRequest) -> Result<(), DomainError> {
        let title =
            validate_title(&request.title).map_err(|e| DomainError::validation(e.to_string()))?;
        let course_id = existing_id(id)?;

        self.repository.update(&course_id, title).await?;

        info!(course_id = %course_id, "Course updated");
        Ok(())
    }

    /// Delete a course
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let course_id = existing_id(id)?;

        self.repository.delete(&course_id).await?;

        info!(course_id = %course_id, "Course deleted");
        Ok(())
    }
}

fn parse_id(id: &str) -> Result<CourseId, DomainError> {
    CourseId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))
}

fn existing_id(id: &str) -> Result<CourseId, DomainError> {
    CourseId::new(id).map_err(|_| DomainError::not_found(format!("Course '{}' not found", id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::course::StorageCourseRepository;
    use crate::infrastructure::storage::InMemoryCatalogStore;

    fn service() -> CourseService<StorageCourseRepository> {
        let store = Arc::new(InMemoryCatalogStore::new());
        CourseService::new(Arc::new(StorageCourseRepository::new(store)))
    }

    fn create_request(id: &str, title: &str) -> CreateCourseRequest {
        CreateCourseRequest {
            id: id.to_string(),
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_trims_title() {
        let service = service();

        let course = service.create(create_request("CS101", "  Intro  ")).await.unwrap();
        assert_eq!(course.title(), "Intro");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let service = service();

        let err = service.create(create_request("CS101", "  ")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_id() {
        let service = service();

        let err = service.create(create_request("CS 101", "Intro")).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidId { .. }));
    }

    #[tokio::test]
    async fn test_create_duplicate_conflicts() {
        let service = service();
        service.create(create_request("CS101", "Intro")).await.unwrap();

        let err = service.create(create_request("CS101", "X")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_absent() {
        let service = service();
        assert!(service.get("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let service = service();

        let err = service
            .update("CS999", UpdateCourseRequest { title: "Y".to_string() })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_blank_title_is_validation_error() {
        let service = service();
        service.create(create_request("CS101", "Intro")).await.unwrap();

        let err = service
            .update("CS101", UpdateCourseRequest { title: String::new() })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));

        let course = service.get("CS101").await.unwrap().unwrap();
        assert_eq!(course.title(), "Intro");
    }

    #[tokio::test]
    async fn test_update_malformed_id_is_not_found() {
        let service = service();

        let err = service
            .update("CS 101", UpdateCourseRequest { title: "Y".to_string() })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_malformed_id_is_not_found() {
        let service = service();

        let err = service.delete(&"C".repeat(100)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let service = service();

        let err = service.delete("CS102").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
