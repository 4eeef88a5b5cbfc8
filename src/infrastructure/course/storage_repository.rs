//! Storage-backed course repository implementation

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::course::{Course, CourseId, CourseRepository};
use crate::domain::storage::CatalogStore;
use crate::domain::DomainError;

/// Storage-backed implementation of CourseRepository
pub struct StorageCourseRepository {
    store: Arc<dyn CatalogStore>,
}

impl StorageCourseRepository {
    /// Create a new storage-backed repository
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

impl Debug for StorageCourseRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageCourseRepository").finish_non_exhaustive()
    }
}

#[async_trait]
impl CourseRepository for StorageCourseRepository {
    async fn get(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        self.store.select_course(id).await
    }

    async fn list(&self) -> Result<Vec<Course>, DomainError> {
        self.store.select_courses().await
    }

    async fn add(&self, id: CourseId, title: &str) -> Result<Course, DomainError> {
        let course = Course::new(id, title);

        if self.store.insert_course(&course).await? == 0 {
            return Err(DomainError::conflict(format!(
                "Course '{}' already exists",
                course.id()
            )));
        }

        Ok(course)
    }

    async fn update(&self, id: &CourseId, title: &str) -> Result<(), DomainError> {
        if self.store.update_course(id, title, Utc::now()).await? == 0 {
            return Err(DomainError::not_found(format!("Course '{}' not found", id)));
        }

        Ok(())
    }

    async fn delete(&self, id: &CourseId) -> Result<(), DomainError> {
        if self.store.delete_course(id).await? == 0 {
            return Err(DomainError::not_found(format!("Course '{}' not found", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::MockCatalogStore;
    use crate::infrastructure::storage::InMemoryCatalogStore;

    fn repository() -> StorageCourseRepository {
        StorageCourseRepository::new(Arc::new(InMemoryCatalogStore::new()))
    }

    fn id(value: &str) -> CourseId {
        CourseId::new(value).unwrap()
    }

    #[tokio::test]
    async fn test_add_then_get_round_trip() {
        let repo = repository();
        repo.add(id("CS101"), "Intro").await.unwrap();

        let course = repo.get(&id("CS101")).await.unwrap().unwrap();
        assert_eq!(course.title(), "Intro");
        assert_eq!(course.created_at(), course.last_modified_at());
    }

    #[tokio::test]
    async fn test_repeated_get_is_idempotent() {
        let repo = repository();
        repo.add(id("CS101"), "Intro").await.unwrap();

        let first = repo.get(&id("CS101")).await.unwrap();
        let second = repo.get(&id("CS101")).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_duplicate_add_conflicts_and_keeps_title() {
        let repo = repository();
        repo.add(id("CS101"), "Intro").await.unwrap();

        let err = repo.add(id("CS101"), "X").await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict { .. }));

        let course = repo.get(&id("CS101")).await.unwrap().unwrap();
        assert_eq!(course.title(), "Intro");
    }

    #[tokio::test]
    async fn test_update_before_create_is_not_found() {
        let repo = repository();

        let err = repo.update(&id("CS999"), "Y").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(repo.get(&id("CS999")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_refreshes_modified_only() {
        let repo = repository();
        let created = repo.add(id("CS101"), "Intro").await.unwrap();

        repo.update(&id("CS101"), "Intro to Rust").await.unwrap();

        let course = repo.get(&id("CS101")).await.unwrap().unwrap();
        assert_eq!(course.title(), "Intro to Rust");
        assert_eq!(course.created_at(), created.created_at());
        assert!(course.last_modified_at() >= created.last_modified_at());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_absent() {
        let repo = repository();
        repo.add(id("CS102"), "Y").await.unwrap();

        repo.delete(&id("CS102")).await.unwrap();

        assert!(repo.get(&id("CS102")).await.unwrap().is_none());
        let err = repo.delete(&id("CS102")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_empty_catalog() {
        let repo = repository();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_is_not_absence() {
        let mut store = MockCatalogStore::new();
        store
            .expect_select_course()
            .returning(|_| Err(DomainError::storage("connection lost")));
        store
            .expect_select_courses()
            .returning(|| Err(DomainError::storage("connection lost")));

        let repo = StorageCourseRepository::new(Arc::new(store));

        assert!(repo.get(&id("CS101")).await.unwrap_err().is_storage());
        assert!(repo.list().await.unwrap_err().is_storage());
    }
}
