//! Common utilities: worker pool sizing.

use crate::constants::{FALLBACK_CPUS, WORKERS_PER_CPU};

/// Get the default worker pool size (2 * `num_cpus`).
#[must_use]
pub fn default_parallelism() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(FALLBACK_CPUS);
    cpus * WORKERS_PER_CPU
}

/// Resolve a requested worker count, with zero meaning "use the default".
#[must_use]
pub fn worker_count(requested: usize) -> usize {
    if requested > 0 {
        requested
    } else {
        default_parallelism()
    }
}
