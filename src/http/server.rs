//! HTTP server startup logic.

use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::{HttpServerConfig, SHUTDOWN_GRACE_SECS};
use crate::routes::create_router;
use crate::state::AppState;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind the configured address and serve the router until SIGINT/SIGTERM.
///
/// Bind failure is returned immediately; the caller treats it as fatal.
pub async fn start_server(state: AppState, config: &HttpServerConfig) -> Result<(), ServerError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    serve(listener, state, shutdown::shutdown_signal()).await
}

/// Serve the router on an already-bound listener until `signal` resolves.
///
/// Once the signal fires the listener stops accepting and the worker pool is
/// closed: requests already holding a worker finish, requests still waiting
/// for one get 503. Draining is capped at `SHUTDOWN_GRACE_SECS`.
pub async fn serve<S>(listener: TcpListener, state: AppState, signal: S) -> Result<(), ServerError>
where
    S: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, workers = state.workers.size(), "Starting HTTP server");

    let workers = state.workers.clone();
    let app = create_router(state);

    let draining = Arc::new(Notify::new());
    let notify = draining.clone();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            workers.close();
            notify.notify_one();
        })
        .into_future();

    let grace_elapsed = async move {
        draining.notified().await;
        tracing::info!(
            grace_secs = SHUTDOWN_GRACE_SECS,
            "Graceful shutdown initiated, draining in-flight requests"
        );
        tokio::time::sleep(Duration::from_secs(SHUTDOWN_GRACE_SECS)).await;
    };

    tokio::select! {
        result = server => {
            result?;
            tracing::info!("Server stopped");
            Ok(())
        }
        _ = grace_elapsed => {
            tracing::warn!("Grace period elapsed with requests still in flight, exiting");
            Ok(())
        }
    }
}
