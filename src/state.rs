//! Shared application state for the middleware stack.

use crate::config::AppConfig;
use crate::http::WorkerPool;

/// Shared application state, cloneable across the middleware stack.
///
/// Handlers are pure and never see it; the admission middleware and the
/// shutdown path share the worker pool through it.
#[derive(Clone)]
pub struct AppState {
    pub workers: WorkerPool,
}

impl AppState {
    /// Creates a new application state with a worker pool sized from the configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            workers: WorkerPool::new(config.http.workers),
        }
    }
}
