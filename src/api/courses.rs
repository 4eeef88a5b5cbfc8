//! Course endpoints
//!
//! Every keyed handler takes [`RequireApiKey`] before its path and body
//! extractors, so key rejection happens before any body decoding or store
//! access.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::debug;

use crate::api::middleware::RequireApiKey;
use crate::api::state::AppState;
use crate::api::types::{ApiError, CourseMap, CourseMutationResponse, CoursePayload, Json};
use crate::infrastructure::course::{CreateCourseRequest, UpdateCourseRequest};

pub const BANNER: &str = "Welcome to the GoSchool REST API!";

/// GET {prefix}/
pub async fn home() -> &'static str {
    BANNER
}

/// GET {prefix}/courses
pub async fn list_courses(
    State(state): State<AppState>,
    RequireApiKey: RequireApiKey,
) -> Result<Json<CourseMap>, ApiError> {
    debug!("Listing all courses");

    let courses = state.course_service.list().await?;

    Ok(Json(courses.iter().collect()))
}

/// GET {prefix}/courses/{course_id}
pub async fn get_course(
    State(state): State<AppState>,
    RequireApiKey: RequireApiKey,
    Path(course_id): Path<String>,
) -> Result<Json<CourseMap>, ApiError> {
    debug!(course_id = %course_id, "Getting course");

    let course = state
        .course_service
        .get(&course_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No course found: {}", course_id)))?;

    Ok(Json(CourseMap::from(&course)))
}

/// POST {prefix}/courses/{course_id}
pub async fn create_course(
    State(state): State<AppState>,
    RequireApiKey: RequireApiKey,
    Path(course_id): Path<String>,
    Json(payload): Json<CoursePayload>,
) -> Result<(StatusCode, Json<CourseMutationResponse>), ApiError> {
    debug!(course_id = %course_id, "Creating course");

    let request = CreateCourseRequest {
        id: course_id,
        title: payload.into_title()?,
    };

    let course = state.course_service.create(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(CourseMutationResponse::new("Course added", course.id().as_str())),
    ))
}

/// PUT {prefix}/courses/{course_id}
pub async fn update_course(
    State(state): State<AppState>,
    RequireApiKey: RequireApiKey,
    Path(course_id): Path<String>,
    Json(payload): Json<CoursePayload>,
) -> Result<Json<CourseMutationResponse>, ApiError> {
    debug!(course_id = %course_id, "Updating course");

    let request = UpdateCourseRequest {
        title: payload.into_title()?,
    };

    state.course_service.update(&course_id, request).await?;

    Ok(Json(CourseMutationResponse::new("Course updated", course_id)))
}

/// DELETE {prefix}/courses/{course_id}
pub async fn delete_course(
    State(state): State<AppState>,
    RequireApiKey: RequireApiKey,
    Path(course_id): Path<String>,
) -> Result<Json<CourseMutationResponse>, ApiError> {
    debug!(course_id = %course_id, "Deleting course");

    state.course_service.delete(&course_id).await?;

    Ok(Json(CourseMutationResponse::new("Course deleted", course_id)))
}
