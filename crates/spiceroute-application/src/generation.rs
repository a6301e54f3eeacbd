//! Last-request-wins bookkeeping.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request counter. Each issued request takes a fresh token; a
/// result may only be applied while its token is still the latest one.
#[derive(Debug, Default)]
pub struct Generation(AtomicU64);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next token, invalidating every earlier one.
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.load(Ordering::SeqCst) == token
    }

    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_token_is_current() {
        let generation = Generation::new();
        let first = generation.advance();
        let second = generation.advance();
        assert!(second > first);
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
        assert_eq!(generation.current(), second);
    }
}
