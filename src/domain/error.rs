use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid ID format: {message}")]
    InvalidId { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Persistence layer is unreachable or rejected a statement
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::InvalidId {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Whether the error came from the persistence layer
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Course 'CS101' not found");
        assert_eq!(error.to_string(), "Not found: Course 'CS101' not found");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Title cannot be empty");
        assert_eq!(error.to_string(), "Validation error: Title cannot be empty");
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("Course 'CS101' already exists");
        assert_eq!(error.to_string(), "Conflict: Course 'CS101' already exists");
    }

    #[test]
    fn test_storage_error_is_distinguishable() {
        assert!(DomainError::storage("connection reset").is_storage());
        assert!(!DomainError::not_found("CS101").is_storage());
    }
}
