use crate::progress::ProgressSnapshot;
use crate::types::SearchSpace;
use cache_padded::CachePadded;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Shared state of one search: found flag, attempt counter, result slot.
///
/// Created per search and handed to every worker by reference. The found
/// flag only ever moves from false to true, and only the worker that makes
/// that transition may deliver a result.
#[derive(Debug)]
pub struct SearchCoordinator {
    found: CachePadded<AtomicBool>,
    attempts: CachePadded<AtomicU64>,
    total: SearchSpace,
    started: Instant,
    result: mpsc::Sender<String>,
}

impl SearchCoordinator {
    /// Create the coordinator and the receiving end of its single-slot result channel
    pub fn new(total: SearchSpace) -> (Self, mpsc::Receiver<String>) {
        let (result, receiver) = mpsc::channel(1);
        let coordinator = Self {
            found: CachePadded::new(AtomicBool::new(false)),
            attempts: CachePadded::new(AtomicU64::new(0)),
            total,
            started: Instant::now(),
            result,
        };
        (coordinator, receiver)
    }

    pub fn is_found(&self) -> bool {
        self.found.load(Ordering::Acquire)
    }

    /// Count one verified candidate
    pub fn record_attempt(&self) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    /// Try to become the winner for `candidate`.
    ///
    /// Returns true for exactly one caller per search; that caller's
    /// candidate is placed in the result slot.
    pub fn claim(&self, candidate: String) -> bool {
        if self
            .found
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        // Capacity one and a single winner: this can only fail if the
        // driver has already gone away.
        let _ = self.result.try_send(candidate);
        true
    }

    pub fn total(&self) -> SearchSpace {
        self.total
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Read-only view for the progress reporter
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::new(self.attempts(), self.total, self.elapsed())
    }
}
