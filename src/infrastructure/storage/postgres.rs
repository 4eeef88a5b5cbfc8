//! PostgreSQL catalog store with connection pooling

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::{debug, info};

use crate::domain::api_key::ApiKeyId;
use crate::domain::course::{Course, CourseId};
use crate::domain::storage::CatalogStore;
use crate::domain::DomainError;

const CREATE_COURSES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS courses (
        course_id        VARCHAR(64)  PRIMARY KEY,
        title            VARCHAR(255) NOT NULL,
        created_at       TIMESTAMPTZ  NOT NULL,
        last_modified_at TIMESTAMPTZ  NOT NULL
    )
"#;

const CREATE_API_KEYS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS api_keys (
        key_id VARCHAR(255) PRIMARY KEY
    )
"#;

/// PostgreSQL connection pool configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// How long a request may wait for a pooled connection, in seconds
    pub acquire_timeout_secs: u64,
    /// Idle timeout in seconds
    pub idle_timeout_secs: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/course_catalog".to_string(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 600,
        }
    }
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn with_acquire_timeout(mut self, secs: u64) -> Self {
        self.acquire_timeout_secs = secs;
        self
    }

    pub fn with_idle_timeout(mut self, secs: u64) -> Self {
        self.idle_timeout_secs = secs;
        self
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
    }
}

/// Catalog store backed by PostgreSQL
///
/// All statements are parameterized. Uniqueness of `course_id` is enforced
/// by the primary key and `INSERT ... ON CONFLICT DO NOTHING`.
#[derive(Clone)]
pub struct PostgresCatalogStore {
    pool: PgPool,
}

impl Debug for PostgresCatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresCatalogStore")
            .field("pool_size", &self.pool.size())
            .finish()
    }
}

impl PostgresCatalogStore {
    /// Creates a store over an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool using the given configuration
    pub async fn connect(config: &PostgresConfig) -> Result<Self, DomainError> {
        info!(
            max_connections = config.max_connections,
            acquire_timeout_secs = config.acquire_timeout_secs,
            "Connecting to PostgreSQL"
        );

        let pool = config
            .pool_options()
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

        Ok(Self::new(pool))
    }

    /// Creates the catalog tables when missing
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        for statement in [CREATE_COURSES_TABLE, CREATE_API_KEYS_TABLE] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to create table: {}", e)))?;
        }

        debug!("Catalog schema ensured");
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for PostgresCatalogStore {
    async fn insert_course(&self, course: &Course) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO courses (course_id, title, created_at, last_modified_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (course_id) DO NOTHING
            "#,
        )
        .bind(course.id().as_str())
        .bind(course.title())
        .bind(course.created_at())
        .bind(course.last_modified_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to insert course: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn update_course(
        &self,
        id: &CourseId,
        title: &str,
        modified_at: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE courses
            SET title = $2, last_modified_at = $3
            WHERE course_id = $1
            "#,
        )
        .bind(id.as_str())
        .bind(title)
        .bind(modified_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update course: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn delete_course(&self, id: &CourseId) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM courses WHERE course_id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete course: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn select_course(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT course_id, title, created_at, last_modified_at
            FROM courses
            WHERE course_id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get course: {}", e)))?;

        row.as_ref().map(row_to_course).transpose()
    }

    async fn select_courses(&self) -> Result<Vec<Course>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT course_id, title, created_at, last_modified_at
            FROM courses
            ORDER BY course_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list courses: {}", e)))?;

        rows.iter().map(row_to_course).collect()
    }

    async fn select_api_key(&self, key: &ApiKeyId) -> Result<bool, DomainError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM api_keys WHERE key_id = $1)")
                .bind(key.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to look up API key: {}", e)))?;

        Ok(exists)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Database ping failed: {}", e)))?;

        Ok(())
    }
}

fn row_to_course(row: &PgRow) -> Result<Course, DomainError> {
    let id: String = column(row, "course_id")?;
    let title: String = column(row, "title")?;
    let created_at: DateTime<Utc> = column(row, "created_at")?;
    let last_modified_at: DateTime<Utc> = column(row, "last_modified_at")?;

    let course_id = CourseId::new(&id)
        .map_err(|e| DomainError::storage(format!("Invalid course ID in database: {}", e)))?;

    Ok(Course::restore(course_id, title, created_at, last_modified_at))
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::storage(format!("Failed to decode column '{}': {}", name, e)))
}
