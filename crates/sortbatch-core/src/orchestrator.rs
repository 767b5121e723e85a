//! Core orchestration: timed batch execution.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::batch::{Batch, ResultSet};
use crate::executor::{Executor, SortError};

/// Result of one timed batch execution.
#[derive(Debug, Clone)]
pub struct TimedResult {
    /// The sorted sub-arrays.
    pub sorted_arrays: ResultSet,
    /// Wall-clock time from dispatch start to full completion.
    pub elapsed: Duration,
}

impl TimedResult {
    /// Elapsed time in nanoseconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn time_ns(&self) -> u64 {
        u64::try_from(self.elapsed.as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Execute one batch with the given executor and measure its duration.
pub fn execute_timed(executor: &dyn Executor, batch: Batch) -> Result<TimedResult, SortError> {
    let tasks = batch.len();
    let start = Instant::now();
    let sorted_arrays = executor.execute(batch)?;
    let elapsed = start.elapsed();

    debug!(
        executor = executor.name(),
        tasks,
        elapsed_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        "Batch complete"
    );

    Ok(TimedResult {
        sorted_arrays,
        elapsed,
    })
}
