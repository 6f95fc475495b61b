use std::time::Duration;

/// Default depth of the candidate queue
pub const DEFAULT_QUEUE_CAPACITY: usize = 10_000;

/// Default interval between progress lines
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_secs(1);

/// Search engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of verification workers
    pub workers: usize,

    /// Capacity of the bounded queue between generator and workers
    pub queue_capacity: usize,

    /// How often the driver samples progress
    pub progress_interval: Duration,

    /// Print progress lines while searching
    pub show_progress: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            show_progress: true,
        }
    }
}

impl SearchConfig {
    /// Create a config; `workers == 0` selects one worker per CPU
    pub fn new(workers: usize, queue_capacity: usize) -> Self {
        let workers = if workers == 0 { default_workers() } else { workers };
        Self {
            workers,
            queue_capacity: queue_capacity.max(1),
            ..Default::default()
        }
    }

    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        // tokio intervals panic on a zero period
        self.progress_interval = interval.max(Duration::from_millis(1));
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

/// One worker per available CPU, at least one
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_values() {
        let config = SearchConfig::new(0, 0);
        assert!(config.workers >= 1);
        assert_eq!(config.queue_capacity, 1);
    }

    #[test]
    fn test_explicit_workers_kept() {
        let config = SearchConfig::new(3, 64);
        assert_eq!(config.workers, 3);
        assert_eq!(config.queue_capacity, 64);
        assert_eq!(config.progress_interval, DEFAULT_PROGRESS_INTERVAL);
    }

    #[test]
    fn test_zero_interval_clamped() {
        let config = SearchConfig::default().with_progress_interval(Duration::ZERO);
        assert_eq!(config.progress_interval, Duration::from_millis(1));
    }
}
