//! HTTP route handlers.
//!
//! Both routes serve per-request dynamic content, so responses carry a
//! no-store Cache-Control header. Request tracing is enabled via middleware
//! that generates a unique request ID for each incoming request, allowing
//! correlation of all logs within a request.

pub mod greeting;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_DYNAMIC;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Greeting - embeds a per-call counter, never cacheable
    let greeting_routes = Router::new().route("/", get(greeting::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_DYNAMIC),
        ),
    );

    // Health check - always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_DYNAMIC),
        ),
    );

    Router::new()
        .merge(greeting_routes)
        .merge(health_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
