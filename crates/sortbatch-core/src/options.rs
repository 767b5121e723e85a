//! Executor options and configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::common::worker_count;
use crate::constants::DEFAULT_SIMULATED_WORK;

/// Order in which the concurrent executor returns sorted sub-arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultOrder {
    /// The order in which tasks finish and are drained from the completion
    /// channel. Not guaranteed to match input order.
    #[default]
    Completion,
    /// Input order: each result is written into the slot of its input index.
    Input,
}

impl ResultOrder {
    /// Get the configuration name of this ordering.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completion => "completion",
            Self::Input => "input",
        }
    }
}

impl fmt::Display for ResultOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "completion" => Ok(Self::Completion),
            "input" => Ok(Self::Input),
            other => Err(format!(
                "unknown result order: {other} (expected completion or input)"
            )),
        }
    }
}

/// Options for batch execution.
#[derive(Debug, Clone)]
pub struct ExecutorOptions {
    /// Pause performed by every task after sorting.
    pub simulated_work: Duration,
    /// Worker pool size for the concurrent executor (0 = default parallelism).
    pub max_workers: usize,
    /// Result ordering of the concurrent executor.
    pub result_order: ResultOrder,
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self {
            simulated_work: DEFAULT_SIMULATED_WORK,
            max_workers: 0,
            result_order: ResultOrder::Completion,
        }
    }
}

impl ExecutorOptions {
    /// Normalize options, resolving a zero worker count to the default.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        self.max_workers = worker_count(self.max_workers);
        self
    }
}
