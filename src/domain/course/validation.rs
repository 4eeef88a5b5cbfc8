//! Course validation utilities

use thiserror::Error;

/// Errors that can occur during course validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CourseValidationError {
    #[error("Course ID cannot be empty")]
    EmptyId,

    #[error("Course ID exceeds maximum length of {0} characters")]
    IdTooLong(usize),

    #[error("Course ID contains invalid character: {0:?}")]
    InvalidIdCharacter(char),

    #[error("Course title cannot be empty")]
    EmptyTitle,

    #[error("Course title exceeds maximum length of {0} characters")]
    TitleTooLong(usize),

    #[error("Course title contains invalid character: {0:?}")]
    InvalidTitleCharacter(char),
}

pub const MAX_COURSE_ID_LENGTH: usize = 64;
pub const MAX_TITLE_LENGTH: usize = 255;

/// Validate a course ID
///
/// Rules:
/// - Cannot be empty
/// - Maximum 64 characters
/// - No whitespace, control characters, or URL delimiters (`/`, `?`, `#`)
pub fn validate_course_id(id: &str) -> Result<(), CourseValidationError> {
    if id.is_empty() {
        return Err(CourseValidationError::EmptyId);
    }

    if id.chars().count() > MAX_COURSE_ID_LENGTH {
        return Err(CourseValidationError::IdTooLong(MAX_COURSE_ID_LENGTH));
    }

    if let Some(c) = id
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || matches!(c, '/' | '?' | '#'))
    {
        return Err(CourseValidationError::InvalidIdCharacter(c));
    }

    Ok(())
}

/// Validate a course title and return its trimmed form
///
/// Control characters are rejected anywhere in the title.
pub fn validate_title(title: &str) -> Result<&str, CourseValidationError> {
    let trimmed = title.trim();

    if trimmed.is_empty() {
        return Err(CourseValidationError::EmptyTitle);
    }

    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(CourseValidationError::TitleTooLong(MAX_TITLE_LENGTH));
    }

    if let Some(c) = trimmed.chars().find(|c| c.is_control()) {
        return Err(CourseValidationError::InvalidTitleCharacter(c));
    }

    Ok(trimmed)
}
