//! Executor registry.

use std::fmt;
use std::sync::Arc;

use crate::concurrent::ConcurrentExecutor;
use crate::executor::{Executor, SortError};
use crate::observer::TaskObserver;
use crate::options::ExecutorOptions;
use crate::sequential::SequentialExecutor;
use crate::sorter::{SortAlgorithm, StdSort, TaskSorter};

/// Which executor a batch runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One sub-array after another on the calling thread.
    Sequential,
    /// One task per sub-array on the worker pool.
    Concurrent,
}

impl ExecutionMode {
    /// Get the short name of this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "single",
            Self::Concurrent => "concurrent",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both executors, built once and shared across requests.
pub struct ExecutorRegistry {
    sequential: Arc<dyn Executor>,
    concurrent: Arc<dyn Executor>,
    sorter: Arc<TaskSorter>,
    options: ExecutorOptions,
}

impl ExecutorRegistry {
    /// Build both executors around the standard sort.
    pub fn new(options: ExecutorOptions, observer: Arc<dyn TaskObserver>) -> Result<Self, SortError> {
        Self::with_algorithm(options, Arc::new(StdSort::new()), observer)
    }

    /// Build both executors around the given sort algorithm.
    pub fn with_algorithm(
        options: ExecutorOptions,
        algorithm: Arc<dyn SortAlgorithm>,
        observer: Arc<dyn TaskObserver>,
    ) -> Result<Self, SortError> {
        let options = options.normalize();
        let sorter = Arc::new(TaskSorter::new(algorithm, options.simulated_work, observer));

        let sequential: Arc<dyn Executor> = Arc::new(SequentialExecutor::new(Arc::clone(&sorter)));
        let concurrent: Arc<dyn Executor> =
            Arc::new(ConcurrentExecutor::new(Arc::clone(&sorter), &options)?);

        Ok(Self {
            sequential,
            concurrent,
            sorter,
            options,
        })
    }

    /// Get the executor for `mode`.
    #[must_use]
    pub fn get(&self, mode: ExecutionMode) -> Arc<dyn Executor> {
        match mode {
            ExecutionMode::Sequential => Arc::clone(&self.sequential),
            ExecutionMode::Concurrent => Arc::clone(&self.concurrent),
        }
    }

    /// Name of the sort algorithm both executors run.
    #[must_use]
    pub fn algorithm_name(&self) -> &'static str {
        self.sorter.algorithm_name()
    }

    /// The normalized options both executors were built from.
    #[must_use]
    pub fn options(&self) -> &ExecutorOptions {
        &self.options
    }
}
