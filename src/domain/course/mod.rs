//! Course domain
//!
//! Entity, identifier validation and the repository contract for catalog
//! courses.

mod entity;
mod repository;
mod validation;

pub use entity::{Course, CourseId};
pub use repository::CourseRepository;
pub use validation::{
    validate_course_id, validate_title, CourseValidationError, MAX_COURSE_ID_LENGTH,
    MAX_TITLE_LENGTH,
};
