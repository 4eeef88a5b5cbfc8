//! Course request and response bodies

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::domain::Course;

/// Body accepted by create and update
///
/// `Title` is the canonical field name; `title` is accepted as an alias.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoursePayload {
    #[serde(rename = "Title", alias = "title", default)]
    pub title: Option<String>,
}

impl CoursePayload {
    /// Extract a non-blank title
    pub fn into_title(self) -> Result<String, ApiError> {
        match self.title {
            Some(title) if !title.trim().is_empty() => Ok(title),
            _ => Err(ApiError::unprocessable(
                "Please supply course information in JSON format with a non-empty Title",
            )
            .with_param("Title")),
        }
    }
}

/// Per-course entry in a response map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInfo {
    #[serde(rename = "Title")]
    pub title: String,
}

/// Courses keyed by course ID, used for single lookups and listings alike
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseMap(pub BTreeMap<String, CourseInfo>);

impl<'a> FromIterator<&'a Course> for CourseMap {
    fn from_iter<I: IntoIterator<Item = &'a Course>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|course| {
                    (
                        course.id().to_string(),
                        CourseInfo {
                            title: course.title().to_string(),
                        },
                    )
                })
                .collect(),
        )
    }
}

impl From<&Course> for CourseMap {
    fn from(course: &Course) -> Self {
        std::iter::once(course).collect()
    }
}

/// Acknowledgement for create, update and delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseMutationResponse {
    pub message: String,
    pub course_id: String,
}

impl CourseMutationResponse {
    pub fn new(message: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            course_id: course_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CourseId;
    use axum::http::StatusCode;

    fn course(id: &str, title: &str) -> Course {
        Course::new(CourseId::new(id).unwrap(), title)
    }

    #[test]
    fn test_payload_canonical_field() {
        let payload: CoursePayload = serde_json::from_str(r#"{"Title": "Intro"}"#).unwrap();
        assert_eq!(payload.into_title().unwrap(), "Intro");
    }

    #[test]
    fn test_payload_lowercase_alias() {
        let payload: CoursePayload = serde_json::from_str(r#"{"title": "Intro"}"#).unwrap();
        assert_eq!(payload.into_title().unwrap(), "Intro");
    }

    #[test]
    fn test_payload_ignores_unknown_fields() {
        let payload: CoursePayload =
            serde_json::from_str(r#"{"Title": "Intro", "Credits": 4}"#).unwrap();
        assert_eq!(payload.into_title().unwrap(), "Intro");
    }

    #[test]
    fn test_payload_missing_or_blank_title() {
        for body in [r#"{}"#, r#"{"Title": ""}"#, r#"{"Title": "   "}"#, r#"{"Title": null}"#] {
            let payload: CoursePayload = serde_json::from_str(body).unwrap();
            let err = payload.into_title().unwrap_err();

            assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY, "body: {}", body);
            assert_eq!(err.response.error.param.as_deref(), Some("Title"));
        }
    }

    #[test]
    fn test_single_course_keeps_map_shape() {
        let map = CourseMap::from(&course("CS101", "Intro"));
        let json = serde_json::to_value(&map).unwrap();

        assert_eq!(json, serde_json::json!({"CS101": {"Title": "Intro"}}));
    }

    #[test]
    fn test_listing_is_sorted_by_id() {
        let courses = [course("IT200", "Networks"), course("CS101", "Intro")];
        let map: CourseMap = courses.iter().collect();

        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"CS101":{"Title":"Intro"},"IT200":{"Title":"Networks"}}"#
        );
    }

    #[test]
    fn test_empty_map_serializes_as_object() {
        assert_eq!(serde_json::to_string(&CourseMap::default()).unwrap(), "{}");
    }
}
