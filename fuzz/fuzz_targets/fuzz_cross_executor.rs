#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use sortbatch_core::observers::NoOpObserver;
use sortbatch_core::{Batch, ExecutionMode, ExecutorOptions, ExecutorRegistry, ResultOrder};

fn registry() -> &'static ExecutorRegistry {
    static REGISTRY: OnceLock<ExecutorRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let opts = ExecutorOptions {
            simulated_work: Duration::ZERO,
            max_workers: 4,
            result_order: ResultOrder::Input,
        };
        ExecutorRegistry::new(opts, Arc::new(NoOpObserver::new())).expect("registry")
    })
}

fuzz_target!(|data: &[u8]| {
    // First byte of each chunk is the sub-array length, the rest are values.
    let mut batch: Batch = Vec::new();
    let mut rest = data;
    while let Some((&len, tail)) = rest.split_first() {
        let take = (len as usize % 16).min(tail.len());
        let (values, tail) = tail.split_at(take);
        batch.push(values.iter().map(|&b| i64::from(b as i8)).collect());
        rest = tail;
    }

    let sequential = registry()
        .get(ExecutionMode::Sequential)
        .execute(batch.clone())
        .expect("sequential");
    let concurrent = registry()
        .get(ExecutionMode::Concurrent)
        .execute(batch)
        .expect("concurrent");

    assert_eq!(sequential, concurrent, "executors disagree");
    assert!(sortbatch_core::batch::is_sorted_set(&sequential));
});
