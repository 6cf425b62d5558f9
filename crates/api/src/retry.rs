use core::time::Duration;

/// Exponential backoff applied when the question bank rate limits us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Unit delay. Retry `k` waits `base * 2^k`.
    pub base: Duration,
    /// Retries allowed after the first attempt.
    pub max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { base: Duration::from_secs(1), max_retries: 3 }
    }
}

impl RetryPolicy {
    /// Delay to wait before the given retry (1-based).
    pub fn delay(&self, retry: u32) -> Duration {
        self.base.saturating_mul(1 << retry.min(16))
    }

    pub const fn should_retry(&self, retries_so_far: u32) -> bool {
        retries_so_far < self.max_retries
    }
}
