use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

/// Counted join point, an orchestrator registers `n` outstanding workers with [`add`] and blocks
/// in [`wait`] until each of them called [`done`] exactly once.
///
/// Calling `done` more often than registered is a programming error and panics.
///
/// [`add`]: JoinBarrier::add
/// [`wait`]: JoinBarrier::wait
/// [`done`]: JoinBarrier::done
#[derive(Debug, Default)]
pub struct JoinBarrier {
    outstanding: Mutex<usize>,
    all_done: Condvar,
}

impl JoinBarrier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, n: usize) {
        let mut outstanding = self.lock();
        *outstanding = outstanding
            .checked_add(n)
            .expect("JoinBarrier outstanding count overflowed");
    }

    pub fn done(&self) {
        let mut outstanding = self.lock();
        assert!(
            *outstanding > 0,
            "JoinBarrier::done called more often than workers were registered"
        );

        *outstanding -= 1;
        if *outstanding == 0 {
            self.all_done.notify_all();
        }
    }

    /// Blocks until the outstanding count reaches zero. Returns immediately if nothing is
    /// registered.
    pub fn wait(&self) {
        let mut outstanding = self.lock();
        while *outstanding > 0 {
            outstanding = self
                .all_done
                .wait(outstanding)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    pub fn outstanding(&self) -> usize {
        *self.lock()
    }

    /// Returns a guard that calls [`done`](JoinBarrier::done) when dropped, including when the
    /// owning worker unwinds. The worker must already be registered via `add`.
    pub fn completion(self: &Arc<Self>) -> Completion {
        Completion {
            barrier: Arc::clone(self),
        }
    }

    // The counter stays consistent even if a thread panicked while holding the lock, all updates
    // are single writes.
    fn lock(&self) -> MutexGuard<'_, usize> {
        self.outstanding
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Signals completion of one registered worker on drop.
#[derive(Debug)]
#[must_use = "dropping a Completion immediately signals the worker as done"]
pub struct Completion {
    barrier: Arc<JoinBarrier>,
}

impl Drop for Completion {
    fn drop(&mut self) {
        self.barrier.done();
    }
}
