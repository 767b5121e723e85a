//! Task completion tracking for the concurrent executor.
//!
//! Every dispatched task owns a [`CompletionGuard`]. Completing the guard
//! pushes the sorted sub-array onto the completion channel; dropping it
//! without completing (a panic unwinding through the task) pushes a fault
//! instead. Either way the guard's wait-group registration is released last,
//! after its outcome is on the channel.

use crossbeam::sync::WaitGroup;
use crossbeam_channel::Sender;

use crate::batch::{ResultSet, SubArray};
use crate::options::ResultOrder;

/// Message pushed onto the completion channel, exactly one per task.
#[derive(Debug)]
pub(crate) enum TaskOutcome {
    /// The task sorted its sub-array.
    Sorted { index: usize, values: SubArray },
    /// The task exited without a result.
    Faulted { index: usize },
}

/// Drop guard that reports a task's outcome and releases its registration.
pub(crate) struct CompletionGuard {
    index: usize,
    // Declared before `_registration` so the sender is dropped first.
    sender: Option<Sender<TaskOutcome>>,
    _registration: WaitGroup,
}

impl CompletionGuard {
    pub(crate) fn new(index: usize, sender: Sender<TaskOutcome>, registration: WaitGroup) -> Self {
        Self {
            index,
            sender: Some(sender),
            _registration: registration,
        }
    }

    /// Push the sorted sub-array and release the registration.
    pub(crate) fn complete(mut self, values: SubArray) {
        if let Some(sender) = self.sender.take() {
            // The receiver only disappears if the caller gave up on the batch.
            let _ = sender.send(TaskOutcome::Sorted {
                index: self.index,
                values,
            });
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if let Some(sender) = self.sender.take() {
            let _ = sender.send(TaskOutcome::Faulted { index: self.index });
        }
    }
}

/// Gathers sorted sub-arrays drained from the completion channel.
pub(crate) enum ResultCollector {
    /// Append in arrival order.
    Completion(ResultSet),
    /// Write into the pre-sized slot of each input index.
    Input(Vec<Option<SubArray>>),
}

impl ResultCollector {
    pub(crate) fn new(order: ResultOrder, total: usize) -> Self {
        match order {
            ResultOrder::Completion => Self::Completion(Vec::with_capacity(total)),
            ResultOrder::Input => Self::Input(vec![None; total]),
        }
    }

    pub(crate) fn push(&mut self, index: usize, values: SubArray) {
        match self {
            Self::Completion(results) => results.push(values),
            Self::Input(slots) => {
                if let Some(slot) = slots.get_mut(index) {
                    *slot = Some(values);
                }
            }
        }
    }

    /// Number of results gathered so far.
    pub(crate) fn received(&self) -> usize {
        match self {
            Self::Completion(results) => results.len(),
            Self::Input(slots) => slots.iter().filter(|slot| slot.is_some()).count(),
        }
    }

    /// Finish collection; `None` if any input slot is still empty.
    pub(crate) fn finish(self) -> Option<ResultSet> {
        match self {
            Self::Completion(results) => Some(results),
            Self::Input(slots) => slots.into_iter().collect(),
        }
    }
}
