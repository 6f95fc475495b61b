//! Odometer enumeration of every candidate a mask describes.
//!
//! One index per position, all starting at zero. After each emission the
//! rightmost index advances and carries left on overflow; generation ends
//! when the carry falls off the leftmost position.

use crate::error::CrackError;
use crate::mask::Mask;
use crossbeam_channel::Sender;
use tracing::{debug, error};

/// Pull-based candidate sequence, finite and not restartable
#[derive(Debug)]
pub struct CandidateGenerator {
    charsets: Vec<&'static [u8]>,
    indices: Vec<usize>,
    buffer: Vec<u8>,
    exhausted: bool,
    emitted: u64,
    abort: Option<CrackError>,
}

impl CandidateGenerator {
    /// Build a generator for `mask`.
    ///
    /// An unknown symbol anywhere in the mask leaves the generator
    /// already exhausted; the reason is kept in [`abort_reason`](Self::abort_reason).
    pub fn new(mask: &Mask) -> Self {
        match mask.resolve() {
            Ok(charsets) => {
                let exhausted = charsets.is_empty() || charsets.iter().any(|c| c.is_empty());
                Self {
                    indices: vec![0; charsets.len()],
                    buffer: vec![0; charsets.len()],
                    charsets,
                    exhausted,
                    emitted: 0,
                    abort: None,
                }
            }
            Err(err) => Self {
                charsets: Vec::new(),
                indices: Vec::new(),
                buffer: Vec::new(),
                exhausted: true,
                emitted: 0,
                abort: Some(err),
            },
        }
    }

    /// Why generation stopped early, if it did
    pub fn abort_reason(&self) -> Option<&CrackError> {
        self.abort.as_ref()
    }

    /// Candidates produced so far
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Advance the odometer. Returns false once the leftmost position overflows.
    fn advance(&mut self) -> bool {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.charsets[pos].len() {
                return true;
            }
            self.indices[pos] = 0;
        }
        false
    }

    /// Drive the whole sequence into `queue`, blocking while it is full.
    ///
    /// `queue` is dropped on return, on completion and on abort alike, which
    /// is what tells the consumers there is nothing more to come. Stops early
    /// if every receiver has gone away.
    pub fn feed(self, queue: Sender<String>) -> u64 {
        self.feed_until(queue, || false)
    }

    /// Like [`feed`](Self::feed), but also stops once `cancelled` returns true
    pub fn feed_until<F: Fn() -> bool>(mut self, queue: Sender<String>, cancelled: F) -> u64 {
        if let Some(reason) = self.abort_reason() {
            error!("{}", reason);
        }

        for candidate in self.by_ref() {
            if cancelled() {
                debug!("search cancelled, stopping generator");
                break;
            }
            if queue.send(candidate).is_err() {
                debug!("candidate queue disconnected, stopping generator");
                break;
            }
        }

        debug!(emitted = self.emitted, "generator finished");
        self.emitted
    }
}

impl Iterator for CandidateGenerator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }

        for (pos, &idx) in self.indices.iter().enumerate() {
            self.buffer[pos] = self.charsets[pos][idx];
        }
        // Alphabets are ASCII-only.
        let candidate = String::from_utf8_lossy(&self.buffer).into_owned();
        self.emitted += 1;

        if !self.advance() {
            self.exhausted = true;
        }
        Some(candidate)
    }
}
