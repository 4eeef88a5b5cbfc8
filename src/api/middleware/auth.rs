//! API key authorization gate

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Query parameters carrying the key
#[derive(Debug, Default, Deserialize)]
struct KeyParams {
    key: Option<String>,
}

/// Extractor that requires a valid API key
///
/// Reads the key from the `key` query parameter. Missing, blank and unknown
/// keys are all rejected with the same `401` response before any other
/// extractor or handler runs. A store failure during lookup is reported as
/// such and not as a rejection.
#[derive(Debug, Clone, Copy)]
pub struct RequireApiKey;

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(key) = extract_api_key_from_query(parts) else {
            debug!("Request without API key");
            return Err(invalid_key());
        };

        if state.api_key_service.validate(&key).await? {
            Ok(RequireApiKey)
        } else {
            Err(invalid_key())
        }
    }
}

fn extract_api_key_from_query(parts: &Parts) -> Option<String> {
    Query::<KeyParams>::try_from_uri(&parts.uri)
        .ok()
        .and_then(|Query(params)| params.key)
        .filter(|key| !key.trim().is_empty())
}

fn invalid_key() -> ApiError {
    ApiError::unauthorized("Invalid key").with_code("invalid_key")
}
