//! Checker configuration types.

use std::time::Duration;

/// Retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Pause between attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Retry configuration for failed resolver queries
///
/// The delay is fixed: every retry waits the same amount of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt
    pub max_retries: u32,

    /// Delay before each retry
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryConfig {
    /// Create a new retry configuration
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Never retry
    #[must_use]
    pub const fn none() -> Self {
        Self::new().max_retries(0)
    }

    /// Set maximum retries
    #[must_use]
    pub const fn max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    /// Set the delay between attempts
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Attempts made before giving up, including the first
    #[must_use]
    pub const fn total_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_three_attempts_one_second_apart() {
        let config = RetryConfig::default();
        assert_eq!(config.total_attempts(), 3);
        assert_eq!(config.delay, Duration::from_secs(1));
    }

    #[test]
    fn builder_setters() {
        let config = RetryConfig::new()
            .max_retries(5)
            .delay(Duration::from_millis(10));
        assert_eq!(config.total_attempts(), 6);
        assert_eq!(RetryConfig::none().total_attempts(), 1);
    }
}
