//! HTTP listener.
//!
//! This module owns everything between the TCP socket and the router:
//! - Binding the configured address and serving the router
//! - The fixed-size worker pool that bounds concurrent requests
//! - Graceful shutdown on SIGTERM/SIGINT

mod pool;
mod server;
mod shutdown;

pub use pool::{WorkerPool, WorkerSlot};
pub use server::{serve, start_server, ServerError};
pub use shutdown::shutdown_signal;
