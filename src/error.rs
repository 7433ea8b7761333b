use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

/// Request-level failures. Every variant renders as a bare status with an
/// empty body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(Method),

    #[error("No route for path: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::info!(error = %self, "Rejecting request");
        self.status().into_response()
    }
}
