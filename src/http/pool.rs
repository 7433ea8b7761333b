//! Fixed-size worker pool.
//!
//! Each request must hold a worker slot while it is served. When every slot
//! is taken, further requests wait (no timeout, no rejection) until one is
//! released. The pool is backed by a tokio semaphore; a slot is an owned
//! permit that is returned when the [`WorkerSlot`] is dropped.

use std::sync::Arc;

use tokio::sync::{AcquireError, OwnedSemaphorePermit, Semaphore};

/// Bounded pool of request workers.
#[derive(Clone, Debug)]
pub struct WorkerPool {
    semaphore: Arc<Semaphore>,
    size: usize,
}

/// One occupied worker slot.
#[derive(Debug)]
pub struct WorkerSlot {
    _permit: OwnedSemaphorePermit,
}

impl WorkerPool {
    pub fn new(size: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    /// Total number of workers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Workers currently free.
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Wait for a free worker and occupy it.
    ///
    /// Fails only if the pool has been closed.
    pub async fn acquire(&self) -> Result<WorkerSlot, AcquireError> {
        let permit = self.semaphore.clone().acquire_owned().await?;
        Ok(WorkerSlot { _permit: permit })
    }

    /// Stop admitting requests. Pending and future `acquire` calls fail.
    pub fn close(&self) {
        self.semaphore.close();
    }
}
