//! Fixed-size pool of verification workers draining the candidate queue.

use crate::coordinator::SearchCoordinator;
use crate::error::{CrackError, Result};
use crate::oracle::Verifier;
use crossbeam_channel::Receiver;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, trace, warn};

/// How a worker left its loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerExit {
    /// Delivered the result
    Won,
    /// Matched, but another worker claimed first
    Lost,
    /// Saw the found flag and discarded the rest of the queue
    Drained,
    /// Queue closed with no match
    Exhausted,
}

/// Discard everything left until the producer closes the queue
fn drain(queue: &Receiver<String>) -> usize {
    queue.iter().count()
}

/// Verify one candidate; a panicking verifier counts as a non-match
fn verify_isolated<V: Verifier + ?Sized>(verifier: &V, candidate: &str) -> bool {
    match catch_unwind(AssertUnwindSafe(|| verifier.verify(candidate.as_bytes()))) {
        Ok(matched) => matched,
        Err(_) => {
            warn!("verifier panicked on a candidate, treating it as no match");
            false
        }
    }
}

/// Body of a single worker
///
/// Every exit path other than `Exhausted` keeps consuming until the queue
/// closes, so a producer blocked on a full queue is always released.
pub fn run_worker<V: Verifier + ?Sized>(
    id: usize,
    queue: &Receiver<String>,
    verifier: &V,
    coordinator: &SearchCoordinator,
) -> WorkerExit {
    while let Ok(candidate) = queue.recv() {
        if coordinator.is_found() {
            let discarded = drain(queue) + 1;
            trace!(worker = id, discarded, "worker drained queue");
            return WorkerExit::Drained;
        }

        coordinator.record_attempt();

        if verify_isolated(verifier, &candidate) {
            let exit = if coordinator.claim(candidate) {
                debug!(worker = id, "worker found the password");
                WorkerExit::Won
            } else {
                WorkerExit::Lost
            };
            drain(queue);
            return exit;
        }
    }

    trace!(worker = id, "queue closed, worker exhausted");
    WorkerExit::Exhausted
}

/// Pool of `workers` threads, built per search
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run every worker to completion and report how each one exited.
    ///
    /// Returns only after all workers have returned.
    pub fn run<V: Verifier + ?Sized>(
        &self,
        queue: Receiver<String>,
        verifier: &V,
        coordinator: &SearchCoordinator,
    ) -> Result<Vec<WorkerExit>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("verify-{}", i))
            .build()
            .map_err(|err| CrackError::Task(format!("Failed to build worker pool: {}", err)))?;

        let mut exits = vec![WorkerExit::Exhausted; self.workers];
        pool.scope(|scope| {
            for (id, slot) in exits.iter_mut().enumerate() {
                let queue = queue.clone();
                scope.spawn(move |_| {
                    *slot = run_worker(id, &queue, verifier, coordinator);
                });
            }
        });
        drop(queue);

        Ok(exits)
    }
}
