//! Health check endpoint for container orchestration.
//!
//! A liveness probe: it only shows that the process can answer HTTP.

use axum::{
    http::{HeaderValue, Method},
    response::{IntoResponse, Response},
};
use http::header::{CACHE_CONTROL, CONTENT_TYPE};

use crate::config::{CACHE_CONTROL_HEALTH, HEALTH_BODY, JSON_CONTENT_TYPE};
use crate::error::AppError;

/// Health check handler. Only GET (any case) is allowed; the body is a fixed literal.
///
/// The 200 answer is never cacheable; the 405 carries no headers of its own.
pub async fn health(method: Method) -> Result<Response, AppError> {
    if !method.as_str().eq_ignore_ascii_case(Method::GET.as_str()) {
        return Err(AppError::MethodNotAllowed(method));
    }

    Ok((
        [
            (CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE)),
            (CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_HEALTH)),
        ],
        HEALTH_BODY,
    )
        .into_response())
}
