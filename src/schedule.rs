//! Deferred continuations.
//!
//! Everything timed in the crate (intro dwell, transition phases, stagger
//! reveals) goes through [`Scheduler::after`]. In the browser that is a
//! `setTimeout` via gloo-timers; on the host it is [`ManualScheduler`], a
//! virtual clock that tests step explicitly.

use std::cell::{Cell, RefCell};

use gloo_timers::callback::Timeout;

pub trait Scheduler {
    /// Run `task` once, `ms` milliseconds from now. Not cancellable.
    fn after(&self, ms: u32, task: Box<dyn FnOnce()>);
}

/// Browser timers. Handles are forgotten: nothing in the crate cancels a wait.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn after(&self, ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(ms, task).forget();
    }
}

struct Pending {
    due: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

/// Deterministic virtual clock. Tasks fire in due-time order, FIFO on ties,
/// and may schedule further tasks while running.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    next_seq: Cell<u64>,
    queue: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward by `ms`, firing everything that comes due on the way.
    pub fn advance_by(&self, ms: u64) {
        let target = self.now.get() + ms;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.now.set(target);
    }

    /// Fire tasks until the queue drains; the clock ends at the last due time.
    pub fn run_until_idle(&self) {
        while let Some(task) = self.pop_due(u64::MAX) {
            task();
        }
    }

    fn pop_due(&self, limit: u64) -> Option<Box<dyn FnOnce()>> {
        let mut queue = self.queue.borrow_mut();
        let idx = queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= limit)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        let pending = queue.swap_remove(idx);
        // Borrow must be released before the task runs; it may call `after`.
        drop(queue);
        self.now.set(pending.due);
        Some(pending.task)
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, ms: u32, task: Box<dyn FnOnce()>) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.queue.borrow_mut().push(Pending {
            due: self.now.get() + ms as u64,
            seq,
            task,
        });
    }
}
