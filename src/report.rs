//! Terminal reports for a finished search.

use crate::mask::Mask;
use crate::types::{SearchOutcome, SearchSpace};
use serde::{Deserialize, Serialize};

/// Machine-readable summary of one search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchReport {
    /// Whether a password was recovered
    pub found: bool,
    /// The recovered password
    pub password: Option<String>,
    /// Candidates actually verified
    pub attempts: u64,
    /// Candidates described by the mask, as a decimal string
    pub search_space: String,
    /// Wall time of the search in seconds
    pub elapsed_secs: f64,
    /// Mask as given
    pub mask: String,
    /// Completion timestamp
    pub finished_at: String,
}

impl SearchReport {
    pub fn new(mask: &Mask, total: SearchSpace, outcome: &SearchOutcome) -> Self {
        Self {
            found: outcome.is_found(),
            password: outcome.password().map(str::to_string),
            attempts: outcome.attempts(),
            search_space: total.to_string(),
            elapsed_secs: outcome.elapsed().as_secs_f64(),
            mask: mask.to_string(),
            finished_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Human-readable terminal report
pub fn render_outcome(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Found {
            password,
            attempts,
            elapsed,
        } => format!(
            "\nPASSWORD FOUND: {}\nAttempts: {}\nTime: {:.2} seconds",
            password,
            attempts,
            elapsed.as_secs_f64()
        ),
        SearchOutcome::NotFound { attempts, elapsed } => format!(
            "\nPASSWORD NOT FOUND\nTried: {} passwords\nTime: {:.2} seconds",
            attempts,
            elapsed.as_secs_f64()
        ),
    }
}
