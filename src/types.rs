use std::time::Duration;

/// Newtype wrapper for the number of candidates a mask describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SearchSpace(pub u128);

impl SearchSpace {
    pub fn new(value: u128) -> Self {
        Self(value)
    }

    pub fn as_u128(&self) -> u128 {
        self.0
    }

    /// Candidates left after `attempts` have been verified
    pub fn remaining(&self, attempts: u64) -> u128 {
        self.0.saturating_sub(attempts as u128)
    }
}

impl std::fmt::Display for SearchSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The single terminal event of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found {
        password: String,
        attempts: u64,
        elapsed: Duration,
    },
    NotFound {
        attempts: u64,
        elapsed: Duration,
    },
}

impl SearchOutcome {
    pub fn attempts(&self) -> u64 {
        match self {
            SearchOutcome::Found { attempts, .. } | SearchOutcome::NotFound { attempts, .. } => {
                *attempts
            }
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            SearchOutcome::Found { elapsed, .. } | SearchOutcome::NotFound { elapsed, .. } => {
                *elapsed
            }
        }
    }

    pub fn password(&self) -> Option<&str> {
        match self {
            SearchOutcome::Found { password, .. } => Some(password),
            SearchOutcome::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_space_remaining() {
        let space = SearchSpace::new(100);
        assert_eq!(space.remaining(40), 60);
        assert_eq!(space.remaining(150), 0);
    }

    #[test]
    fn test_outcome_accessors() {
        let found = SearchOutcome::Found {
            password: "42".to_string(),
            attempts: 43,
            elapsed: Duration::from_millis(5),
        };
        assert!(found.is_found());
        assert_eq!(found.password(), Some("42"));
        assert_eq!(found.attempts(), 43);

        let missing = SearchOutcome::NotFound {
            attempts: 100,
            elapsed: Duration::from_secs(1),
        };
        assert!(!missing.is_found());
        assert_eq!(missing.password(), None);
        assert_eq!(missing.elapsed(), Duration::from_secs(1));
    }
}
