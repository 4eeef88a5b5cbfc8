use serde::Deserialize;

use crate::infrastructure::storage::{PostgresConfig, StorageConfig, StorageType};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageSection,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Prefix under which the course routes are nested
    pub api_prefix: String,
    /// Upper bound on handling time for a single request
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    /// `postgres` or `memory`
    pub backend: String,
    /// Keys accepted by the in-memory backend
    pub memory_api_keys: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    /// Create the catalog tables at startup when missing
    pub ensure_schema: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            api_prefix: "/api/v1".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            memory_api_keys: Vec::new(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        let pool = PostgresConfig::default();

        Self {
            url: pool.url,
            max_connections: pool.max_connections,
            min_connections: pool.min_connections,
            acquire_timeout_secs: pool.acquire_timeout_secs,
            idle_timeout_secs: pool.idle_timeout_secs,
            ensure_schema: true,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("storage.memory_api_keys")
                    .try_parsing(true),
            )
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }

    /// Resolve the storage backend selection into a store configuration
    pub fn storage_config(&self) -> Result<StorageConfig, crate::domain::DomainError> {
        let backend = StorageType::from_str(&self.storage.backend).ok_or_else(|| {
            crate::domain::DomainError::configuration(format!(
                "Unknown storage backend '{}'",
                self.storage.backend
            ))
        })?;

        Ok(match backend {
            StorageType::InMemory => StorageConfig::InMemory {
                api_keys: self.storage.memory_api_keys.clone(),
            },
            StorageType::Postgres => StorageConfig::Postgres {
                config: PostgresConfig::new(&self.database.url)
                    .with_max_connections(self.database.max_connections)
                    .with_min_connections(self.database.min_connections)
                    .with_acquire_timeout(self.database.acquire_timeout_secs)
                    .with_idle_timeout(self.database.idle_timeout_secs),
                ensure_schema: self.database.ensure_schema,
            },
        })
    }
}
