//! Throughput and ETA telemetry sampled from the attempt counter.

use crate::types::SearchSpace;
use std::io::{self, Write};
use std::time::Duration;

/// Point-in-time view of a running search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    pub attempts: u64,
    pub total: SearchSpace,
    pub elapsed: Duration,
}

impl ProgressSnapshot {
    pub fn new(attempts: u64, total: SearchSpace, elapsed: Duration) -> Self {
        Self {
            attempts,
            total,
            elapsed,
        }
    }

    /// Percentage of the space verified so far
    pub fn percent(&self) -> f64 {
        if self.total.as_u128() == 0 {
            return 0.0;
        }
        self.attempts as f64 / self.total.as_u128() as f64 * 100.0
    }

    /// Verified candidates per second
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            0.0
        } else {
            self.attempts as f64 / secs
        }
    }

    /// Estimated time to exhaust the space at the current rate
    pub fn eta(&self) -> Option<Duration> {
        let rate = self.rate();
        if rate <= 0.0 {
            return None;
        }
        let secs = self.total.remaining(self.attempts) as f64 / rate;
        Duration::try_from_secs_f64(secs).ok()
    }

    /// Single progress line, without the leading carriage return
    pub fn render(&self) -> String {
        let eta = match self.eta() {
            Some(eta) => format!("{:.0}s", eta.as_secs_f64()),
            None => "--".to_string(),
        };
        format!(
            "Progress: {:.2}% | Tried: {}/{} | Speed: {:.0} pwd/s | ETA: {}",
            self.percent(),
            self.attempts,
            self.total,
            self.rate(),
            eta
        )
    }
}

/// Rewrites one terminal line with the latest snapshot
pub struct ProgressReporter<W: Write> {
    out: W,
    enabled: bool,
    drawn: bool,
}

impl ProgressReporter<io::Stdout> {
    pub fn stdout(enabled: bool) -> Self {
        Self::new(io::stdout(), enabled)
    }
}

impl<W: Write> ProgressReporter<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self {
            out,
            enabled,
            drawn: false,
        }
    }

    pub fn report(&mut self, snapshot: &ProgressSnapshot) {
        if !self.enabled {
            return;
        }
        // Progress is best effort; a closed stdout must not stop the search.
        let _ = write!(self.out, "\r{}    ", snapshot.render());
        let _ = self.out.flush();
        self.drawn = true;
    }

    /// Terminate the progress line so the final report starts on a fresh one
    pub fn finish(&mut self) {
        if self.drawn {
            let _ = writeln!(self.out);
            let _ = self.out.flush();
            self.drawn = false;
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
