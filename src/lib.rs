//! Scrypt password recovery by exhaustive mask search
//!
//! This library provides the search engine behind `scrypt-crack`:
//! - Per-position character-class masks and their search-space size
//! - Odometer candidate generator feeding a bounded multi-consumer queue
//! - Fixed-size rayon worker pool verifying candidates with scrypt
//! - Lock-free coordinator for single-winner detection and cancellation
//! - Periodic throughput/ETA reporting driven from a tokio loop
//! - The `N*r*p*keyLen*salt*hash` credential record format

pub mod charset;
pub mod cli;
pub mod config;
pub mod coordinator;
pub mod credential;
pub mod error;
pub mod generator;
pub mod mask;
pub mod oracle;
pub mod pool;
pub mod progress;
pub mod report;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use charset::{charset_for, CharClass};
pub use config::SearchConfig;
pub use coordinator::SearchCoordinator;
pub use credential::TargetCredential;
pub use error::{CrackError, Result};
pub use generator::CandidateGenerator;
pub use mask::Mask;
pub use oracle::{derive_key, ScryptOracle, Verifier};
pub use pool::{WorkerExit, WorkerPool};
pub use progress::{ProgressReporter, ProgressSnapshot};
pub use report::{render_outcome, SearchReport};
pub use search::run_search;
pub use types::{SearchOutcome, SearchSpace};
