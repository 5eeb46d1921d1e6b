//! Client-side request rate limiting.
//!
//! A leaky-bucket limiter with no burst allowance: consecutive slots are
//! spaced at least `1s / rate` apart. Callers queue on an async mutex, so
//! slots are handed out one at a time in lock order.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use bs_core::error::{BsError, BsResult};

/// Caps outbound requests to a fixed number per second.
#[derive(Debug)]
pub struct RateLimiter {
    per_request: Duration,
    last: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Create a limiter allowing `rate` requests per second.
    pub fn new(rate: u32) -> BsResult<Self> {
        if rate == 0 {
            return Err(BsError::Config("rate limit must be greater than zero".into()));
        }
        Ok(Self {
            per_request: Duration::from_secs(1) / rate,
            last: Mutex::new(None),
        })
    }

    /// Minimum spacing between two slots.
    pub fn per_request(&self) -> Duration {
        self.per_request
    }

    /// Wait until the next slot is available and claim it.
    ///
    /// Returns the instant the slot was granted. Dropping the returned future
    /// while it waits gives the slot back.
    pub async fn take(&self) -> Instant {
        let mut last = self.last.lock().await;
        let now = Instant::now();

        let slot = match *last {
            Some(prev) if prev + self.per_request > now => {
                let next = prev + self.per_request;
                tokio::time::sleep_until(next).await;
                next
            }
            _ => now,
        };

        *last = Some(slot);
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_zero_rate_rejected() {
        assert!(matches!(RateLimiter::new(0), Err(BsError::Config(_))));
    }

    #[test]
    fn test_per_request_spacing() {
        let limiter = RateLimiter::new(180).unwrap();
        assert_eq!(limiter.per_request(), Duration::from_secs(1) / 180);
        let limiter = RateLimiter::new(4).unwrap();
        assert_eq!(limiter.per_request(), Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_take_is_immediate() {
        let limiter = RateLimiter::new(1).unwrap();
        let start = Instant::now();
        limiter.take().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_takes_are_spaced() {
        let limiter = RateLimiter::new(10).unwrap();
        let start = Instant::now();
        for _ in 0..5 {
            limiter.take().await;
        }
        assert!(start.elapsed() >= Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_time_does_not_accumulate_burst() {
        let limiter = RateLimiter::new(10).unwrap();
        limiter.take().await;
        tokio::time::sleep(Duration::from_secs(5)).await;

        let first = limiter.take().await;
        let second = limiter.take().await;
        assert!(second - first >= Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_callers_are_serialized() {
        let limiter = Arc::new(RateLimiter::new(20).unwrap());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let limiter = limiter.clone();
            handles.push(tokio::spawn(async move { limiter.take().await }));
        }

        let mut slots = Vec::new();
        for h in handles {
            slots.push(h.await.unwrap());
        }
        slots.sort();

        for pair in slots.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(50));
        }
    }
}
