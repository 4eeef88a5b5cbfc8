//! JSON body extractor that reports decode failures as API errors

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::{ApiErrorDetail, ApiErrorResponse, ApiErrorType};

/// JSON extractor that tolerates a missing `Content-Type` header
///
/// Bodies that are empty, not valid JSON, or do not match `T` are rejected
/// with `422 Unprocessable Entity` in the API error format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

/// JSON rejection error that returns API error format
#[derive(Debug)]
pub struct JsonRejection {
    status: StatusCode,
    message: String,
}

impl JsonRejection {
    fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        let response = ApiErrorResponse {
            error: ApiErrorDetail {
                message: self.message,
                error_type: ApiErrorType::InvalidRequestError,
                param: None,
                code: Some("json_parse_error".to_string()),
            },
        };

        (self.status, AxumJson(response)).into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| JsonRejection {
                status: rejection.status(),
                message: format!("Failed to read request body: {}", rejection.body_text()),
            })?;

        decode(&body).map(Json)
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, JsonRejection> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(JsonRejection::unprocessable(
            "Request body is empty. Please supply course information in JSON format",
        ));
    }

    serde_json::from_slice(body).map_err(|err| {
        let message = if err.is_data() {
            format!("Invalid JSON data: {}", err)
        } else {
            format!("Invalid JSON syntax: {}", err)
        };

        JsonRejection::unprocessable(message)
    })
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct TestStruct {
        name: String,
    }

    #[test]
    fn test_decode_valid_body() {
        let value: TestStruct = decode(br#"{"name": "CS101"}"#).unwrap();
        assert_eq!(value.name, "CS101");
    }

    #[test]
    fn test_decode_empty_body() {
        let err = decode::<TestStruct>(b"  \n").unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.message.contains("empty"));
    }

    #[test]
    fn test_decode_syntax_error() {
        let err = decode::<TestStruct>(b"{not json").unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.message.starts_with("Invalid JSON syntax"));
    }

    #[test]
    fn test_decode_shape_error() {
        let err = decode::<TestStruct>(b"[1, 2]").unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.message.starts_with("Invalid JSON data"));
    }

    #[test]
    fn test_json_rejection_into_response() {
        let response = JsonRejection::unprocessable("Test error").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
