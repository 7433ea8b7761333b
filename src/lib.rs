//! echo-server: a minimal HTTP echo service.
//!
//! `POST /` returns the request body unchanged, `GET /health` reports
//! liveness. Requests are served by a fixed-size worker pool.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
