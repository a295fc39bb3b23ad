//! Deferred "run after the current turn" tasks.
//!
//! A turn is the synchronous handling of one user event. Work that must not
//! happen in the middle of that handling (overwriting an input box the user
//! is still typing into, for instance) is queued here and drained once the
//! turn is over. There are no timers: "deferred" means "next scheduling
//! turn", not "after some delay".

use std::collections::VecDeque;

/// FIFO queue of single-shot deferred tasks.
///
/// [`DeferredQueue::take`] hands out every task scheduled so far and leaves
/// the queue empty, so tasks scheduled while the batch is being executed wait
/// for the following turn.
///
/// # Examples
/// ```
/// use frontier_core::scheduler::DeferredQueue;
///
/// let mut queue = DeferredQueue::new();
/// queue.schedule("first");
/// queue.schedule("second");
///
/// let batch: Vec<_> = queue.take().collect();
/// assert_eq!(batch, vec!["first", "second"]);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct DeferredQueue<T> {
    pending: VecDeque<T>,
    scheduled_total: u64,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
            scheduled_total: 0,
        }
    }
}

impl<T> DeferredQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `task` to run after the current turn.
    pub fn schedule(&mut self, task: T) {
        self.pending.push_back(task);
        self.scheduled_total += 1;
    }

    /// Removes and returns every pending task, oldest first.
    pub fn take(&mut self) -> std::collections::vec_deque::IntoIter<T> {
        std::mem::take(&mut self.pending).into_iter()
    }

    /// Number of tasks waiting.
    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if nothing is waiting.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of tasks ever scheduled on this queue.
    #[inline]
    pub fn scheduled_total(&self) -> u64 {
        self.scheduled_total
    }
}
