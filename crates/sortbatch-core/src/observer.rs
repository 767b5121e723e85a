//! Observer pattern for sorted-task notifications.

use std::time::Duration;

/// Report sent by the task sorter once a sub-array has been sorted.
#[derive(Debug, Clone, Copy)]
pub struct TaskReport<'a> {
    /// Label of the executor that ran the task.
    pub executor: &'static str,
    /// Position of the sub-array in the submitted batch.
    pub index: usize,
    /// The sorted contents.
    pub sorted: &'a [i64],
    /// Time spent in the task, simulated work included.
    pub elapsed: Duration,
}

impl<'a> TaskReport<'a> {
    /// Create a new task report.
    #[must_use]
    pub fn new(executor: &'static str, index: usize, sorted: &'a [i64], elapsed: Duration) -> Self {
        Self {
            executor,
            index,
            sorted,
            elapsed,
        }
    }
}

/// Observer trait for receiving task reports.
///
/// Called from worker threads, possibly from several at once.
pub trait TaskObserver: Send + Sync {
    /// Receive a report for one sorted sub-array.
    fn on_task_sorted(&self, report: &TaskReport<'_>);
}
