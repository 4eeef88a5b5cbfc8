//! Course infrastructure - repository and service implementations

mod service;
mod storage_repository;

pub use service::{CourseService, CreateCourseRequest, UpdateCourseRequest};
pub use storage_repository::StorageCourseRepository;
