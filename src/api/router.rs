use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::courses;
use super::health;
use super::middleware::{logging_middleware, redact_uri};
use super::state::AppState;
use crate::config::ServerConfig;

/// Course routes under the API prefix
///
/// `/courses/{course_id}` dispatches on method; methods other than
/// GET/POST/PUT/DELETE get the router's `405`.
pub fn create_course_router(api_prefix: &str) -> Router<AppState> {
    let prefix = normalize_prefix(api_prefix);

    let router = Router::new()
        .route(&format!("{}/", prefix), get(courses::home))
        .route(&format!("{}/courses", prefix), get(courses::list_courses))
        .route(
            &format!("{}/courses/{{course_id}}", prefix),
            get(courses::get_course)
                .post(courses::create_course)
                .put(courses::update_course)
                .delete(courses::delete_course),
        );

    if prefix.is_empty() {
        router
    } else {
        router.route(&prefix, get(courses::home))
    }
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        // Health endpoints (no key required)
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .merge(create_course_router(&server.api_prefix))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::from_fn(logging_middleware))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(server.request_timeout_secs),
                )),
        )
}

fn make_request_span(request: &Request<Body>) -> tracing::Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %redact_uri(request.uri()),
    )
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');

    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
