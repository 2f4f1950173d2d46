//! HTTP route handlers.
//!
//! Both endpoints answer with per-instance data, so every response is marked
//! `no-store`. Request tracing is enabled via middleware that assigns a request
//! ID to each incoming request, allowing correlation of all logs within it.

pub mod health;
pub mod status;

use std::any::Any;
use std::time::Duration;

use axum::{
    http::Uri,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and layers.
pub fn create_router(state: AppState) -> Router {
    let request_timeout = Duration::from_secs(state.config.http.request_timeout_seconds);

    Router::new()
        .route("/", get(status::index))
        .route("/health", get(health::health))
        .fallback(not_found)
        .with_state(state)
        // Panics become a generic JSON 500 instead of a dropped connection
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(detail).into_response()
}
