//! # sortbatch-core
//!
//! Core library for the sortbatch service.
//! Sorts batches of integer arrays either sequentially or concurrently over a
//! bounded worker pool, with fail-safe completion tracking for every task.

pub mod batch;
pub(crate) mod common;
pub(crate) mod completion;
pub mod concurrent;
pub mod constants;
pub mod executor;
pub mod observer;
pub mod observers;
pub mod options;
pub mod orchestrator;
pub mod registry;
pub mod sequential;
pub mod sorter;

// Re-exports
pub use batch::{Batch, ResultSet, SubArray};
pub use constants::{CONCURRENT_LABEL, DEFAULT_SIMULATED_WORK, SEQUENTIAL_LABEL};
pub use executor::{Executor, SortError};
pub use observer::{TaskObserver, TaskReport};
pub use options::{ExecutorOptions, ResultOrder};
pub use orchestrator::{execute_timed, TimedResult};
pub use registry::{ExecutionMode, ExecutorRegistry};
pub use sorter::{SortAlgorithm, StdSort, TaskSorter};

/// Sort every sub-array of `batch` in input order, without simulated work.
///
/// This is a convenience function for simple use cases. For the concurrent
/// path, observers or a simulated delay, build an `ExecutorRegistry`.
///
/// # Example
/// ```
/// let sorted = sortbatch_core::sort_batch(vec![vec![3, 1, 2], vec![0, -1]]);
/// assert_eq!(sorted, vec![vec![1, 2, 3], vec![-1, 0]]);
/// ```
#[must_use]
pub fn sort_batch(batch: Batch) -> ResultSet {
    use std::sync::Arc;

    use observers::NoOpObserver;
    use sequential::SequentialExecutor;

    let sorter = TaskSorter::new(
        Arc::new(StdSort::new()),
        std::time::Duration::ZERO,
        Arc::new(NoOpObserver::new()),
    );
    SequentialExecutor::new(Arc::new(sorter)).sort_all(batch)
}
