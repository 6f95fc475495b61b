//! Search driver: generator, worker pool, coordinator and progress reporter
//! wired together into one run that ends in exactly one [`SearchOutcome`].

use crate::config::SearchConfig;
use crate::coordinator::SearchCoordinator;
use crate::error::{CrackError, Result};
use crate::generator::CandidateGenerator;
use crate::mask::Mask;
use crate::oracle::Verifier;
use crate::pool::{WorkerExit, WorkerPool};
use crate::progress::ProgressReporter;
use crate::types::SearchOutcome;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

/// Enumerate `mask` and verify every candidate with `verifier` until one
/// matches or the space is exhausted.
pub async fn run_search<V>(
    mask: &Mask,
    verifier: Arc<V>,
    config: &SearchConfig,
) -> Result<SearchOutcome>
where
    V: Verifier + ?Sized + 'static,
{
    let total = mask.search_space();
    let (coordinator, mut result) = SearchCoordinator::new(total);
    let coordinator = Arc::new(coordinator);
    let (sender, queue) = crossbeam_channel::bounded::<String>(config.queue_capacity.max(1));

    info!(
        mask = %mask,
        total = %total,
        workers = config.workers,
        queue_capacity = config.queue_capacity,
        "starting search"
    );

    let generator = CandidateGenerator::new(mask);
    let producer_state = Arc::clone(&coordinator);
    let producer = task::spawn_blocking(move || {
        generator.feed_until(sender, || producer_state.is_found())
    });

    // Sent only after every worker has returned.
    let (done_tx, mut done) = oneshot::channel::<()>();
    let pool = WorkerPool::new(config.workers);
    let pool_state = Arc::clone(&coordinator);
    let workers = task::spawn_blocking(move || {
        let exits = pool.run(queue, verifier.as_ref(), &pool_state);
        let _ = done_tx.send(());
        exits
    });

    let mut ticker = time::interval(config.progress_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of an interval completes immediately.
    ticker.tick().await;
    let mut reporter = ProgressReporter::stdout(config.show_progress);

    let outcome = loop {
        tokio::select! {
            biased;

            Some(password) = result.recv() => {
                break SearchOutcome::Found {
                    password,
                    attempts: coordinator.attempts(),
                    elapsed: coordinator.elapsed(),
                };
            }
            _ = &mut done => {
                // A winner fills the slot before its worker returns, so
                // anything delivered is visible here.
                break match result.try_recv() {
                    Ok(password) => SearchOutcome::Found {
                        password,
                        attempts: coordinator.attempts(),
                        elapsed: coordinator.elapsed(),
                    },
                    Err(_) => SearchOutcome::NotFound {
                        attempts: coordinator.attempts(),
                        elapsed: coordinator.elapsed(),
                    },
                };
            }
            _ = ticker.tick() => {
                reporter.report(&coordinator.snapshot());
            }
        }
    };
    reporter.finish();

    let emitted = producer
        .await
        .map_err(|err| CrackError::Task(format!("generator: {}", err)))?;
    let exits = workers
        .await
        .map_err(|err| CrackError::Task(format!("worker pool: {}", err)))??;

    debug!(
        emitted,
        attempts = coordinator.attempts(),
        winners = exits.iter().filter(|e| **e == WorkerExit::Won).count(),
        "search finished"
    );

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    fn quiet(workers: usize, capacity: usize) -> SearchConfig {
        SearchConfig::new(workers, capacity).with_progress(false)
    }

    #[tokio::test]
    async fn test_finds_password() {
        let mask = Mask::parse("dd").unwrap();
        let verifier = Arc::new(|c: &[u8]| c == b"42");
        let outcome = run_search(&mask, verifier, &quiet(4, 16)).await.unwrap();
        assert_eq!(outcome.password(), Some("42"));
        assert!(outcome.attempts() >= 1 && outcome.attempts() <= 100);
    }

    #[tokio::test]
    async fn test_exhausts_space_when_absent() {
        let mask = Mask::parse("ld").unwrap();
        let verifier = Arc::new(|_: &[u8]| false);
        let outcome = run_search(&mask, verifier, &quiet(3, 8)).await.unwrap();
        assert!(!outcome.is_found());
        assert_eq!(outcome.attempts() as u128, mask.search_space().as_u128());
    }

    #[tokio::test]
    async fn test_unknown_symbol_reports_not_found() {
        let mask = Mask::parse("xd").unwrap();
        let verifier = Arc::new(|_: &[u8]| true);
        let outcome = run_search(&mask, verifier, &quiet(2, 8)).await.unwrap();
        assert!(!outcome.is_found());
        assert_eq!(outcome.attempts(), 0);
        assert!((outcome.attempts() as u128) < mask.search_space().as_u128());
    }

    #[tokio::test]
    async fn test_single_worker_single_slot_queue() {
        let mask = Mask::parse("ddd").unwrap();
        let verifier = Arc::new(|c: &[u8]| c == b"500");
        let outcome = run_search(&mask, verifier, &quiet(1, 1)).await.unwrap();
        assert_eq!(outcome.password(), Some("500"));
        // '5' is index 4 and '0' is index 9 in "1234567890"
        assert_eq!(outcome.attempts(), 500);
    }

    #[tokio::test]
    async fn test_first_candidate_found_on_first_attempt() {
        let mask = Mask::parse("dd").unwrap();
        let verifier = Arc::new(|c: &[u8]| c == b"11");
        let outcome = run_search(&mask, verifier, &quiet(1, 1)).await.unwrap();
        assert_eq!(outcome.password(), Some("11"));
        assert_eq!(outcome.attempts(), 1);
    }

    #[tokio::test]
    async fn test_progress_ticks_do_not_disturb_outcome() {
        let mask = Mask::parse("dd").unwrap();
        let calls = Arc::new(AtomicU64::new(0));
        let counted = Arc::clone(&calls);
        let verifier = Arc::new(move |_: &[u8]| {
            counted.fetch_add(1, Ordering::Relaxed);
            std::thread::sleep(Duration::from_millis(1));
            false
        });
        let config = quiet(2, 4).with_progress_interval(Duration::from_millis(5));
        let outcome = run_search(&mask, verifier, &config).await.unwrap();
        assert_eq!(outcome.attempts(), 100);
        assert_eq!(calls.load(Ordering::Relaxed), 100);
    }

    #[tokio::test]
    async fn test_dyn_verifier() {
        let mask = Mask::parse("l").unwrap();
        let verifier: Arc<dyn Verifier> = Arc::new(|c: &[u8]| c == b"q");
        let outcome = run_search(&mask, verifier, &quiet(2, 2)).await.unwrap();
        assert_eq!(outcome.password(), Some("q"));
    }
}
