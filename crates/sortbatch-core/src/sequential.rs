//! Sequential executor: one sub-array after another on the calling thread.

use std::sync::Arc;

use crate::batch::{Batch, ResultSet};
use crate::constants::SEQUENTIAL_LABEL;
use crate::executor::{Executor, SortError};
use crate::sorter::TaskSorter;

/// Runs the task sorter over each sub-array in input order.
pub struct SequentialExecutor {
    sorter: Arc<TaskSorter>,
}

impl SequentialExecutor {
    /// Create a new sequential executor.
    #[must_use]
    pub fn new(sorter: Arc<TaskSorter>) -> Self {
        Self { sorter }
    }

    /// Sort every sub-array; `result[i]` is the sorted `batch[i]`.
    #[must_use]
    pub fn sort_all(&self, batch: Batch) -> ResultSet {
        batch
            .into_iter()
            .enumerate()
            .map(|(index, values)| self.sorter.sort_task(SEQUENTIAL_LABEL, index, values))
            .collect()
    }
}

impl Executor for SequentialExecutor {
    fn execute(&self, batch: Batch) -> Result<ResultSet, SortError> {
        Ok(self.sort_all(batch))
    }

    fn name(&self) -> &'static str {
        SEQUENTIAL_LABEL
    }
}
