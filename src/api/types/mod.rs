//! Request and response types for the course API

pub mod course;
pub mod error;
pub mod json;

pub use course::{CourseInfo, CourseMap, CourseMutationResponse, CoursePayload};
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
