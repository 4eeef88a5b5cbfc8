//! In-memory catalog store

use std::collections::{BTreeMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::api_key::ApiKeyId;
use crate::domain::course::{Course, CourseId};
use crate::domain::storage::CatalogStore;
use crate::domain::DomainError;

/// Thread-safe in-memory catalog store
///
/// Useful for testing and development. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    courses: RwLock<BTreeMap<CourseId, Course>>,
    api_keys: RwLock<HashSet<String>>,
}

impl InMemoryCatalogStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that accepts the given keys
    pub fn with_api_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            courses: RwLock::default(),
            api_keys: RwLock::new(keys.into_iter().map(Into::into).collect()),
        }
    }
}

fn poisoned(e: impl std::fmt::Display) -> DomainError {
    DomainError::storage(format!("Failed to acquire lock: {}", e))
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn insert_course(&self, course: &Course) -> Result<u64, DomainError> {
        let mut courses = self.courses.write().map_err(poisoned)?;

        if courses.contains_key(course.id()) {
            return Ok(0);
        }

        courses.insert(course.id().clone(), course.clone());
        Ok(1)
    }

    async fn update_course(
        &self,
        id: &CourseId,
        title: &str,
        modified_at: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        let mut courses = self.courses.write().map_err(poisoned)?;

        match courses.get_mut(id) {
            Some(course) => {
                course.retitle(title, modified_at);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_course(&self, id: &CourseId) -> Result<u64, DomainError> {
        let mut courses = self.courses.write().map_err(poisoned)?;
        Ok(u64::from(courses.remove(id).is_some()))
    }

    async fn select_course(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        let courses = self.courses.read().map_err(poisoned)?;
        Ok(courses.get(id).cloned())
    }

    async fn select_courses(&self) -> Result<Vec<Course>, DomainError> {
        let courses = self.courses.read().map_err(poisoned)?;
        Ok(courses.values().cloned().collect())
    }

    async fn select_api_key(&self, key: &ApiKeyId) -> Result<bool, DomainError> {
        let keys = self.api_keys.read().map_err(poisoned)?;
        Ok(keys.contains(key.as_str()))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, title: &str) -> Course {
        Course::new(CourseId::new(id).unwrap(), title)
    }

    #[tokio::test]
    async fn test_insert_reports_duplicate_as_zero_rows() {
        let store = InMemoryCatalogStore::new();

        assert_eq!(store.insert_course(&course("CS101", "Intro")).await.unwrap(), 1);
        assert_eq!(store.insert_course(&course("CS101", "Other")).await.unwrap(), 0);

        let stored = store
            .select_course(&CourseId::new("CS101").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.title(), "Intro");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_rows() {
        let store = InMemoryCatalogStore::new();
        let id = CourseId::new("CS999").unwrap();

        assert_eq!(store.update_course(&id, "Y", Utc::now()).await.unwrap(), 0);
        assert_eq!(store.delete_course(&id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_select_courses_is_ordered() {
        let store = InMemoryCatalogStore::new();
        store.insert_course(&course("IT200", "Networks")).await.unwrap();
        store.insert_course(&course("CS101", "Intro")).await.unwrap();

        let ids: Vec<String> = store
            .select_courses()
            .await
            .unwrap()
            .iter()
            .map(|c| c.id().to_string())
            .collect();

        assert_eq!(ids, vec!["CS101", "IT200"]);
    }

    #[tokio::test]
    async fn test_api_key_lookup() {
        let store = InMemoryCatalogStore::with_api_keys(["secret-key"]);

        assert!(store
            .select_api_key(&ApiKeyId::parse("secret-key").unwrap())
            .await
            .unwrap());
        assert!(!store
            .select_api_key(&ApiKeyId::parse("other").unwrap())
            .await
            .unwrap());
    }
}
