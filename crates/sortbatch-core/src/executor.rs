//! Executor trait and the error type shared by all executors.
//!
//! `Executor` is the public trait consumed by the request handler.
//! `SequentialExecutor` and `ConcurrentExecutor` implement it on top of a
//! shared `TaskSorter`.

use crate::batch::{Batch, ResultSet};

/// Error type for batch execution.
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// One or more sort tasks exited without producing a result.
    #[error("{failed} of {total} sort tasks failed")]
    TaskFault {
        /// Number of tasks that faulted.
        failed: usize,
        /// Number of tasks in the batch.
        total: usize,
    },

    /// The completion channel closed before every result arrived.
    #[error("batch incomplete: received {received} of {total} results")]
    Incomplete {
        /// Number of results drained from the completion channel.
        received: usize,
        /// Number of tasks in the batch.
        total: usize,
    },

    /// The worker pool could not be created.
    #[error("worker pool error: {0}")]
    Pool(String),

    /// A coordinator thread could not be spawned or joined.
    #[error("coordinator error: {0}")]
    Coordinator(String),
}

/// Public trait for batch executors.
pub trait Executor: Send + Sync {
    /// Sort every sub-array of `batch`.
    fn execute(&self, batch: Batch) -> Result<ResultSet, SortError>;

    /// Get the label of this executor, as reported with each task.
    fn name(&self) -> &'static str;
}
