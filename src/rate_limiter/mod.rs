use std::time::{Duration, Instant};

use tokio::time::sleep;

/// Enforces a fixed delay between consecutive upstream requests.
///
/// The stats API tolerates slow sequential traffic but throttles bursts, so
/// every call waits out the remainder of the configured gap since the
/// previous one. The first call never waits.
pub struct RateLimiter {
    delay: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_request: None,
        }
    }

    pub async fn wait(&mut self) {
        if let Some(remaining) = self.remaining_delay() {
            sleep(remaining).await;
        }
        self.last_request = Some(Instant::now());
    }

    fn remaining_delay(&self) -> Option<Duration> {
        let last = self.last_request?;
        self.delay.checked_sub(last.elapsed())
    }
}
