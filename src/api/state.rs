//! Application state for shared services

use std::sync::Arc;

use crate::domain::api_key::ApiKeyRepository;
use crate::domain::course::CourseRepository;
use crate::domain::storage::CatalogStore;
use crate::domain::{Course, DomainError};
use crate::infrastructure::api_key::ApiKeyService;
use crate::infrastructure::course::{CourseService, CreateCourseRequest, UpdateCourseRequest};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<dyn CourseServiceTrait>,
    pub api_key_service: Arc<dyn ApiKeyServiceTrait>,
    pub store: Arc<dyn CatalogStore>,
}

/// Trait for course service operations
#[async_trait::async_trait]
pub trait CourseServiceTrait: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<Course>, DomainError>;
    async fn list(&self) -> Result<Vec<Course>, DomainError>;
    async fn create(&self, request: CreateCourseRequest) -> Result<Course, DomainError>;
    async fn update(&self, id: &str, request: UpdateCourseRequest) -> Result<(), DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}

/// Trait for API key service operations
#[async_trait::async_trait]
pub trait ApiKeyServiceTrait: Send + Sync {
    async fn validate(&self, key: &str) -> Result<bool, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R: CourseRepository + 'static> CourseServiceTrait for CourseService<R> {
    async fn get(&self, id: &str) -> Result<Option<Course>, DomainError> {
        CourseService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<Course>, DomainError> {
        CourseService::list(self).await
    }

    async fn create(&self, request: CreateCourseRequest) -> Result<Course, DomainError> {
        CourseService::create(self, request).await
    }

    async fn update(&self, id: &str, request: UpdateCourseRequest) -> Result<(), DomainError> {
        CourseService::update(self, id, request).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        CourseService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<R: ApiKeyRepository + 'static> ApiKeyServiceTrait for ApiKeyService<R> {
    async fn validate(&self, key: &str) -> Result<bool, DomainError> {
        ApiKeyService::validate(self, key).await
    }
}
