//! Echo endpoint.
//!
//! `POST /` returns the request body byte-for-byte. The body is never parsed:
//! the JSON content type is asserted on the response regardless of what was
//! sent, and arbitrary (including non-UTF-8) bytes pass through unchanged.

use axum::{
    body::Bytes,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    response::{IntoResponse, Response},
};

use crate::config::JSON_CONTENT_TYPE;
use crate::error::AppError;

/// Echo handler. Any method other than POST is rejected with 405.
///
/// The method name is compared case-insensitively, so `post` is accepted.
pub async fn echo(method: Method, body: Bytes) -> Result<Response, AppError> {
    if !method.as_str().eq_ignore_ascii_case(Method::POST.as_str()) {
        return Err(AppError::MethodNotAllowed(method));
    }

    tracing::debug!(bytes = body.len(), "Echoing request body");

    Ok((
        [(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
        body,
    )
        .into_response())
}
