//! Concrete observer implementations.

use parking_lot::Mutex;
use tracing::info;

use crate::observer::{TaskObserver, TaskReport};

/// Observer that logs one line per sorted task.
pub struct LoggingObserver;

impl LoggingObserver {
    /// Create a new logging observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskObserver for LoggingObserver {
    #[allow(clippy::cast_possible_truncation)]
    fn on_task_sorted(&self, report: &TaskReport<'_>) {
        info!(
            task = report.executor,
            index = report.index,
            sorted = ?report.sorted,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Task sorted"
        );
    }
}

/// An owned copy of a [`TaskReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTask {
    /// Label of the executor that ran the task.
    pub executor: &'static str,
    /// Position of the sub-array in the submitted batch.
    pub index: usize,
    /// The sorted contents.
    pub sorted: Vec<i64>,
}

/// Observer that keeps every report it receives, in arrival order.
pub struct RecordingObserver {
    tasks: Mutex<Vec<RecordedTask>>,
}

impl RecordingObserver {
    /// Create a new, empty recording observer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Number of reports received so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Copy of every report received so far.
    #[must_use]
    pub fn tasks(&self) -> Vec<RecordedTask> {
        self.tasks.lock().clone()
    }
}

impl Default for RecordingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskObserver for RecordingObserver {
    fn on_task_sorted(&self, report: &TaskReport<'_>) {
        self.tasks.lock().push(RecordedTask {
            executor: report.executor,
            index: report.index,
            sorted: report.sorted.to_vec(),
        });
    }
}

/// Null object pattern: discards every report.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskObserver for NoOpObserver {
    fn on_task_sorted(&self, _report: &TaskReport<'_>) {
        // Intentionally empty
    }
}
