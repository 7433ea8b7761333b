//! HTTP route table.
//!
//! Two fixed routes, matched on the exact path:
//! - `/` → [`echo::echo`]
//! - `/health` → [`health::health`]
//!
//! Both accept every method at the routing level and do their own method
//! check, so a wrong method gets a bare 405. Any other path gets a bare 404.

pub mod echo;
pub mod health;

use axum::{extract::DefaultBodyLimit, http::Uri, middleware, routing::any, Router};

use crate::error::AppError;
use crate::middleware::{request_id_layer, worker_pool_layer};
use crate::state::AppState;

/// Fallback for unmatched paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_owned())
}

/// Creates the Axum router with both routes, the 404 fallback and middleware.
pub fn create_router(state: AppState) -> Router {
    // Echo - no body size limit, the payload is buffered whole
    let echo_routes = Router::new()
        .route("/", any(echo::echo))
        .layer(DefaultBodyLimit::disable());

    // Health check - the handler marks its 200 answer uncacheable
    let health_routes = Router::new().route("/health", any(health::health));

    Router::new()
        .merge(echo_routes)
        .merge(health_routes)
        .fallback(not_found)
        // Worker pool - each request holds one slot while it is served
        .layer(middleware::from_fn_with_state(state, worker_pool_layer))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
