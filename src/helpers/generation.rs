//! Request generation counter for discarding stale async responses.
//!
//! A fetch records the generation current at launch; by the time its result
//! arrives, a newer fetch may have started. Results carrying an old
//! generation must be dropped instead of overwriting newer state.

/// Monotonically increasing fetch generation
#[derive(Debug, Clone, Copy, Default)]
pub struct Generation(u64);

impl Generation {
    /// Advance to the next generation and return its token
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Whether a token belongs to the most recent fetch
    pub fn is_current(&self, token: u64) -> bool {
        self.0 == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_is_current() {
        let mut g = Generation::default();
        let t = g.begin();
        assert!(g.is_current(t));
    }

    #[test]
    fn test_older_token_goes_stale() {
        let mut g = Generation::default();
        let first = g.begin();
        let second = g.begin();
        assert!(!g.is_current(first));
        assert!(g.is_current(second));
    }
}
