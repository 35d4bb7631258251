//! Tick scheduling
//!
//! The controller never sleeps on its own; it asks a [`Scheduler`] to resume
//! it after the tick period. Production code uses tokio's timer, tests can
//! pause tokio's clock or record the requested delays.

use std::time::Duration;

use async_trait::async_trait;

/// Delay between two display updates
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Capability to resume the caller after a delay
#[async_trait]
pub trait Scheduler: Send {
    /// Complete once `delay` has passed
    async fn after(&mut self, delay: Duration);
}

/// Scheduler on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn after(&mut self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Scheduler that returns immediately and remembers every request
///
/// No time passes, so frames recorded under it share one timestamp.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    requests: Vec<Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far
    pub fn requests(&self) -> &[Duration] {
        &self.requests
    }
}

#[async_trait]
impl Scheduler for ManualScheduler {
    async fn after(&mut self, delay: Duration) {
        self.requests.push(delay);
    }
}
