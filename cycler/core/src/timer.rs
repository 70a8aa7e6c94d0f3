//! Deferred Execution
//!
//! The cycler never sleeps on its own. After each step the driver asks a
//! [`Timer`] to wait out the step's delay, which keeps the transition logic
//! independent of wall-clock time.
//!
//! - [`TokioTimer`] waits on the tokio clock. Under a paused runtime
//!   (`#[tokio::test(start_paused = true)]`) it runs on virtual time.
//! - [`ManualTimer`] never waits at all; it advances a virtual clock and
//!   records every delay it was asked for.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

/// Fire-once delay facility used between cycler steps
#[async_trait]
pub trait Timer: Send + Sync {
    /// Resolve once `delay` has elapsed
    async fn wait(&self, delay: Duration);
}

#[async_trait]
impl<T: Timer + ?Sized> Timer for Arc<T> {
    async fn wait(&self, delay: Duration) {
        (**self).wait(delay).await;
    }
}

/// Timer backed by `tokio::time`
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

#[async_trait]
impl Timer for TokioTimer {
    async fn wait(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

#[derive(Debug, Default)]
struct VirtualClock {
    elapsed: Duration,
    requested: Vec<Duration>,
}

/// Virtual-clock timer for deterministic tests
///
/// `wait` yields once to the scheduler and returns without sleeping. Clones
/// share one clock.
#[derive(Clone, Debug, Default)]
pub struct ManualTimer {
    clock: Arc<Mutex<VirtualClock>>,
}

impl ManualTimer {
    /// Create a clock at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total virtual time waited so far
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.lock().elapsed
    }

    /// Every delay requested, in order
    #[must_use]
    pub fn requested(&self) -> Vec<Duration> {
        self.clock.lock().requested.clone()
    }
}

#[async_trait]
impl Timer for ManualTimer {
    async fn wait(&self, delay: Duration) {
        {
            let mut clock = self.clock.lock();
            clock.elapsed += delay;
            clock.requested.push(delay);
        }
        tokio::task::yield_now().await;
    }
}
