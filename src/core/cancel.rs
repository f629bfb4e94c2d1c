use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::errors::{TaskError, TaskResult};

/// Cooperative cancellation handle shared between the host and the task
/// thread. The host keeps a clone and flips it when tearing a task down.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Work routines call this between steps; once the host has
    /// cancelled, the task unwinds with `TaskError::Cancelled`.
    pub fn checkpoint(&self) -> TaskResult<()> {
        if self.is_cancelled() {
            Err(TaskError::Cancelled)
        } else {
            Ok(())
        }
    }
}
