//! Request middleware.
//!
//! - `request_id_layer` generates a UUID v4 per request and opens a tracing
//!   span carrying method and path, so every log line of a request can be
//!   correlated. This is the per-request console trace. The same ID is
//!   returned to the client in the `x-request-id` response header.
//! - `worker_pool_layer` admits the request into the fixed-size worker pool
//!   and holds the slot until the response is produced.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::Instrument;
use uuid::Uuid;

use crate::state::AppState;

/// Response header carrying the request ID logged for the request
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware that generates a request ID and creates a request span.
///
/// This should be the outermost middleware layer so the span also covers
/// time spent waiting for a worker.
pub async fn request_id_layer(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();

    async move {
        tracing::info!("Received request");

        let mut response = next.run(request).await;
        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}

/// Middleware that occupies one worker slot for the duration of the request.
///
/// Waits without limit while the pool is full. The pool is closed when
/// shutdown begins; requests still waiting at that point get 503.
pub async fn worker_pool_layer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let slot = match state.workers.acquire().await {
        Ok(slot) => slot,
        Err(_) => {
            tracing::warn!("Worker pool closed, refusing request");
            return StatusCode::SERVICE_UNAVAILABLE.into_response();
        }
    };

    tracing::trace!(free = state.workers.available(), "Worker acquired");
    let response = next.run(request).await;
    drop(slot);

    response
}
