//! Concurrent executor: fan-out over a bounded worker pool, fan-in through a
//! completion channel.
//!
//! Each sub-array becomes one task on a fixed-size rayon pool. A coordinator
//! thread waits on the batch's wait group and then drops the last sender of
//! the completion channel, which the calling thread drains until it closes.

use std::any::Any;
use std::sync::Arc;
use std::thread;

use crossbeam::sync::WaitGroup;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, error, warn};

use crate::batch::{Batch, ResultSet};
use crate::completion::{CompletionGuard, ResultCollector, TaskOutcome};
use crate::constants::CONCURRENT_LABEL;
use crate::executor::{Executor, SortError};
use crate::options::{ExecutorOptions, ResultOrder};
use crate::sorter::TaskSorter;

/// Runs one task per sub-array on a shared, fixed-size worker pool.
pub struct ConcurrentExecutor {
    sorter: Arc<TaskSorter>,
    pool: ThreadPool,
    workers: usize,
    order: ResultOrder,
}

impl ConcurrentExecutor {
    /// Create a new concurrent executor and its worker pool.
    ///
    /// `opts.max_workers` of zero selects the default parallelism.
    pub fn new(sorter: Arc<TaskSorter>, opts: &ExecutorOptions) -> Result<Self, SortError> {
        let opts = opts.clone().normalize();
        let pool = ThreadPoolBuilder::new()
            .num_threads(opts.max_workers)
            .thread_name(|i| format!("sort-worker-{i}"))
            .panic_handler(log_task_panic)
            .build()
            .map_err(|e| SortError::Pool(format!("failed to create worker pool: {e}")))?;

        Ok(Self {
            sorter,
            pool,
            workers: opts.max_workers,
            order: opts.result_order,
        })
    }
}

impl Executor for ConcurrentExecutor {
    fn execute(&self, batch: Batch) -> Result<ResultSet, SortError> {
        let total = batch.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        // Room for every outcome, so no task ever blocks on a push.
        let (sender, receiver) = crossbeam_channel::bounded::<TaskOutcome>(total);
        let wait_group = WaitGroup::new();

        for (index, values) in batch.into_iter().enumerate() {
            let guard = CompletionGuard::new(index, sender.clone(), wait_group.clone());
            let sorter = Arc::clone(&self.sorter);
            self.pool.spawn(move || {
                let sorted = sorter.sort_task(CONCURRENT_LABEL, index, values);
                guard.complete(sorted);
            });
        }
        debug!(tasks = total, workers = self.workers, "Dispatched sort tasks");

        let coordinator = thread::Builder::new()
            .name("sort-coordinator".to_string())
            .spawn(move || {
                wait_group.wait();
                drop(sender);
            })
            .map_err(|e| SortError::Coordinator(format!("failed to spawn coordinator: {e}")))?;

        let mut collector = ResultCollector::new(self.order, total);
        let mut faulted = Vec::new();
        for outcome in &receiver {
            match outcome {
                TaskOutcome::Sorted { index, values } => collector.push(index, values),
                TaskOutcome::Faulted { index } => faulted.push(index),
            }
        }

        coordinator
            .join()
            .map_err(|_| SortError::Coordinator("coordinator panicked".to_string()))?;

        if !faulted.is_empty() {
            warn!(failed = faulted.len(), total, indices = ?faulted, "Sort tasks faulted");
            return Err(SortError::TaskFault {
                failed: faulted.len(),
                total,
            });
        }

        let received = collector.received();
        collector
            .finish()
            .filter(|results| results.len() == total)
            .ok_or(SortError::Incomplete { received, total })
    }

    fn name(&self) -> &'static str {
        CONCURRENT_LABEL
    }
}

fn log_task_panic(payload: Box<dyn Any + Send>) {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    error!(panic = %message, "Sort task panicked");
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::batch::same_sub_arrays;
    use crate::observers::{NoOpObserver, RecordingObserver};
    use crate::sorter::{SortAlgorithm, StdSort};

    fn options(workers: usize, order: ResultOrder, work: Duration) -> ExecutorOptions {
        ExecutorOptions {
            simulated_work: work,
            max_workers: workers,
            result_order: order,
        }
    }

    fn executor(workers: usize, order: ResultOrder, work: Duration) -> ConcurrentExecutor {
        let sorter = TaskSorter::new(Arc::new(StdSort::new()), work, Arc::new(NoOpObserver::new()));
        ConcurrentExecutor::new(Arc::new(sorter), &options(workers, order, work)).unwrap()
    }

    /// Panics on any sub-array containing a negative number.
    struct RejectNegatives;

    impl SortAlgorithm for RejectNegatives {
        fn sort(&self, values: &mut [i64]) {
            assert!(values.iter().all(|v| *v >= 0), "negative value in task");
            values.sort_unstable();
        }

        fn name(&self) -> &'static str {
            "RejectNegatives"
        }
    }

    #[test]
    fn empty_batch() {
        let exec = executor(2, ResultOrder::Completion, Duration::ZERO);
        assert!(exec.execute(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn single_sub_array() {
        let exec = executor(2, ResultOrder::Completion, Duration::ZERO);
        assert_eq!(exec.execute(vec![vec![3, 1, 2]]).unwrap(), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn completion_order_is_a_permutation() {
        let exec = executor(4, ResultOrder::Completion, Duration::ZERO);
        let batch: Batch = (0..32).map(|i| vec![i * 3 % 7, -i, i]).collect();
        let expected: ResultSet = batch
            .iter()
            .map(|v| {
                let mut v = v.clone();
                v.sort_unstable();
                v
            })
            .collect();

        let result = exec.execute(batch).unwrap();
        assert!(same_sub_arrays(&result, &expected));
    }

    #[test]
    fn input_order_matches_indices() {
        let exec = executor(4, ResultOrder::Input, Duration::ZERO);
        let batch: Batch = (0..16).map(|i| vec![i, -i, 100 - i]).collect();
        let expected: ResultSet = (0..16).map(|i| vec![-i, i, 100 - i]).collect();
        assert_eq!(exec.execute(batch).unwrap(), expected);
    }

    #[test]
    fn more_tasks_than_workers() {
        let exec = executor(1, ResultOrder::Input, Duration::ZERO);
        let batch: Batch = (0..10).map(|i| vec![10 - i, i]).collect();
        let result = exec.execute(batch).unwrap();
        assert_eq!(result.len(), 10);
        assert_eq!(result[0], vec![0, 10]);
        assert_eq!(exec.pool.current_num_threads(), 1);
    }

    #[test]
    fn runs_tasks_in_parallel() {
        let work = Duration::from_millis(100);
        let exec = executor(3, ResultOrder::Completion, work);
        let start = Instant::now();
        exec.execute(vec![vec![5, 3], vec![4, 1], vec![2, 0]]).unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= work);
        // Three sequential delays would take at least 300ms.
        assert!(elapsed < Duration::from_millis(250), "took {elapsed:?}");
    }

    #[test]
    fn reports_every_task() {
        let observer = Arc::new(RecordingObserver::new());
        let sorter = TaskSorter::new(Arc::new(StdSort::new()), Duration::ZERO, observer.clone());
        let exec = ConcurrentExecutor::new(
            Arc::new(sorter),
            &options(2, ResultOrder::Completion, Duration::ZERO),
        )
        .unwrap();
        exec.execute(vec![vec![1], vec![2], vec![3]]).unwrap();

        let mut indices: Vec<usize> = observer.tasks().iter().map(|t| t.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(observer.tasks().iter().all(|t| t.executor == CONCURRENT_LABEL));
    }

    #[test]
    fn faulting_task_does_not_hang() {
        let sorter = TaskSorter::new(
            Arc::new(RejectNegatives),
            Duration::ZERO,
            Arc::new(NoOpObserver::new()),
        );
        let exec = ConcurrentExecutor::new(
            Arc::new(sorter),
            &options(2, ResultOrder::Completion, Duration::ZERO),
        )
        .unwrap();

        let result = exec.execute(vec![vec![2, 1], vec![-1, 4], vec![3, 0]]);
        assert!(matches!(
            result,
            Err(SortError::TaskFault {
                failed: 1,
                total: 3
            })
        ));

        // The pool survives the panic and keeps serving batches.
        assert_eq!(exec.execute(vec![vec![2, 1]]).unwrap(), vec![vec![1, 2]]);
    }

    #[test]
    fn zero_workers_uses_default_parallelism() {
        let exec = executor(0, ResultOrder::Completion, Duration::ZERO);
        assert_eq!(exec.pool.current_num_threads(), crate::common::default_parallelism());
        assert_eq!(exec.workers, exec.pool.current_num_threads());
    }

    #[test]
    fn name_is_concurrent() {
        assert_eq!(executor(1, ResultOrder::Input, Duration::ZERO).name(), "Concurrent");
    }
}
