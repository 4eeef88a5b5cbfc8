//! Course entity and related types

use chrono::{DateTime, Utc};

use super::validation::{validate_course_id, CourseValidationError};

/// Caller-assigned course identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(String);

impl CourseId {
    /// Create a new CourseId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, CourseValidationError> {
        let id = id.into();
        validate_course_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A course in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    id: CourseId,
    title: String,
    created_at: DateTime<Utc>,
    last_modified_at: DateTime<Utc>,
}

impl Course {
    /// Create a new course stamped with the current time
    pub fn new(id: CourseId, title: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id,
            title: title.into(),
            created_at: now,
            last_modified_at: now,
        }
    }

    /// Rebuild a course from persisted columns
    pub fn restore(
        id: CourseId,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
        last_modified_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            created_at,
            last_modified_at,
        }
    }

    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_modified_at(&self) -> DateTime<Utc> {
        self.last_modified_at
    }

    /// Replace the title and refresh the modification timestamp
    pub fn retitle(&mut self, title: impl Into<String>, at: DateTime<Utc>) {
        self.title = title.into();
        self.last_modified_at = at;
    }
}
