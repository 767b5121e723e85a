//! Sort algorithms and the `TaskSorter` decorator.
//!
//! `SortAlgorithm` is the internal trait implemented by algorithms.
//! `TaskSorter` is a decorator that adds the simulated work delay and task
//! reporting; both executors run every sub-array through it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::batch::SubArray;
use crate::observer::{TaskObserver, TaskReport};

/// Trait for in-place integer sort algorithms.
pub trait SortAlgorithm: Send + Sync {
    /// Sort `values` into non-decreasing order.
    fn sort(&self, values: &mut [i64]);

    /// Get the name of this algorithm.
    fn name(&self) -> &'static str;
}

/// The standard library's unstable comparison sort.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdSort;

impl StdSort {
    /// Create a new standard sort.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SortAlgorithm for StdSort {
    fn sort(&self, values: &mut [i64]) {
        values.sort_unstable();
    }

    fn name(&self) -> &'static str {
        "StdSort"
    }
}

/// Decorator that wraps a `SortAlgorithm` with simulated work and reporting.
pub struct TaskSorter {
    algorithm: Arc<dyn SortAlgorithm>,
    simulated_work: Duration,
    observer: Arc<dyn TaskObserver>,
}

impl TaskSorter {
    /// Create a new `TaskSorter`.
    #[must_use]
    pub fn new(
        algorithm: Arc<dyn SortAlgorithm>,
        simulated_work: Duration,
        observer: Arc<dyn TaskObserver>,
    ) -> Self {
        Self {
            algorithm,
            simulated_work,
            observer,
        }
    }

    /// Sort one sub-array as a task of the executor labelled `executor`.
    ///
    /// The simulated work happens after sorting; the observer is notified last.
    pub fn sort_task(&self, executor: &'static str, index: usize, mut values: SubArray) -> SubArray {
        let start = Instant::now();
        self.algorithm.sort(&mut values);

        if !self.simulated_work.is_zero() {
            std::thread::sleep(self.simulated_work);
        }

        self.observer
            .on_task_sorted(&TaskReport::new(executor, index, &values, start.elapsed()));
        values
    }

    /// Get the simulated work duration.
    #[must_use]
    pub fn simulated_work(&self) -> Duration {
        self.simulated_work
    }

    /// Get the name of the wrapped algorithm.
    #[must_use]
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }
}
