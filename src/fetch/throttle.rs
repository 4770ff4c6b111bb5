// src/fetch/throttle.rs

use std::time::Duration;

use tokio::time::sleep;

/// Decides how long to wait before the next outbound request.
#[allow(async_fn_in_trait)]
pub trait Throttle {
    fn next_delay(&mut self) -> Duration;

    async fn wait(&mut self) {
        let delay = self.next_delay();
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}

/// The same pause before every request, the first one included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    interval: Duration,
}

impl FixedDelay {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Throttle for FixedDelay {
    fn next_delay(&mut self) -> Duration {
        self.interval
    }
}
