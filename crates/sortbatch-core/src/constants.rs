//! Constants for task labelling and default execution settings.

use std::time::Duration;

/// Default simulated work performed by each task after sorting.
pub const DEFAULT_SIMULATED_WORK: Duration = Duration::from_secs(1);

/// Task label reported by the sequential executor.
pub const SEQUENTIAL_LABEL: &str = "Sequential";

/// Task label reported by the concurrent executor.
pub const CONCURRENT_LABEL: &str = "Concurrent";

/// CPU count assumed when the platform cannot report its parallelism.
pub const FALLBACK_CPUS: usize = 4;

/// Worker threads per available CPU in the default pool size.
///
/// Tasks spend most of their time in simulated work rather than on a CPU,
/// so the pool is oversubscribed.
pub const WORKERS_PER_CPU: usize = 2;
