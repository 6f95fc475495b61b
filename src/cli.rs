use crate::config::{SearchConfig, DEFAULT_QUEUE_CAPACITY};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

const MASK_HELP: &str = "\
Mask characters:
  a - all characters (letters + digits)
  d - digits only (0-9)
  l - lowercase letters (a-z)
  u - uppercase letters (A-Z)
  s - special symbols (!@#$...)

Example: scrypt-crack -m aaadd hash.txt
  This will try all 3-letter + 2-digit combinations";

/// Scrypt mask brute-forcer
/// Recovers the password behind a scrypt hash record by exhaustive mask search
#[derive(Parser, Debug, Clone)]
#[command(name = "scrypt-crack")]
#[command(version = "0.1.0")]
#[command(about = "Scrypt bruteforce over a character-class mask", long_about = None)]
#[command(after_help = MASK_HELP)]
pub struct Args {
    /// Password mask (a=all, d=digit, l=lowercase, u=uppercase, s=special)
    #[arg(short = 'm', long = "mask")]
    pub mask: String,

    /// Hash record file (N*r*p*keyLen*salt*hash)
    #[arg(value_name = "HASH_FILE")]
    pub hash_file: PathBuf,

    /// Number of verification workers (0 = one per CPU)
    #[arg(short = 't', long = "threads", default_value = "0")]
    pub threads: usize,

    /// Capacity of the candidate queue
    #[arg(long = "queue-capacity", default_value_t = DEFAULT_QUEUE_CAPACITY)]
    pub queue_capacity: usize,

    /// Interval between progress lines in milliseconds
    #[arg(long = "progress-interval-ms", default_value = "1000")]
    pub progress_interval_ms: u64,

    /// Reject unknown mask characters before the search starts
    #[arg(long = "strict-mask")]
    pub strict_mask: bool,

    /// Disable the live progress line
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Print the final report as JSON
    #[arg(long = "json")]
    pub json: bool,
}

impl Args {
    /// Validate the arguments
    pub fn validate(&self) -> Result<(), String> {
        if self.mask.is_empty() {
            return Err("Mask cannot be empty".to_string());
        }

        if self.hash_file.as_os_str().is_empty() {
            return Err("Hash file path cannot be empty".to_string());
        }

        if self.queue_capacity == 0 {
            return Err("queue-capacity must be greater than 0".to_string());
        }

        if self.progress_interval_ms == 0 {
            return Err("progress-interval-ms must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Search configuration described by these arguments
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new(self.threads, self.queue_capacity)
            .with_progress_interval(Duration::from_millis(self.progress_interval_ms))
            .with_progress(!self.no_progress && !self.json)
    }
}

/// Scrypt hash record generator
#[derive(Parser, Debug, Clone)]
#[command(name = "scrypt-gen")]
#[command(version = "0.1.0")]
#[command(about = "Generate an N*r*p*keyLen*salt*hash record for a password", long_about = None)]
pub struct GenArgs {
    /// Password to hash
    #[arg(long = "pass")]
    pub pass: String,

    /// CPU/memory cost (must be power of 2)
    #[arg(short = 'N', long = "cost", default_value = "16384")]
    pub n: u64,

    /// Block size
    #[arg(short = 'r', long = "block-size", default_value = "8")]
    pub r: u32,

    /// Parallelization
    #[arg(short = 'P', long = "parallelism", default_value = "1")]
    pub p: u32,

    /// Key length in bytes
    #[arg(short = 'l', long = "key-len", default_value = "32")]
    pub key_len: usize,

    /// Output file (prints to stdout if not specified)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

impl GenArgs {
    /// Validate the arguments
    pub fn validate(&self) -> Result<(), String> {
        if self.pass.is_empty() {
            return Err("Password cannot be empty".to_string());
        }

        if self.n < 2 || !self.n.is_power_of_two() {
            return Err(format!("N ({}) must be a power of 2 greater than 1", self.n));
        }

        if self.key_len == 0 {
            return Err("Key length must be greater than 0".to_string());
        }

        Ok(())
    }
}
