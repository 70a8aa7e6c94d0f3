//! Cycler Driver
//!
//! Runs a [`PhraseCycler`] against a [`Timer`]: step, wait out the step's
//! delay, repeat. Each step is scheduled only after the previous one has
//! mutated the state and rendered, so steps never overlap.
//!
//! # Lifecycle
//!
//! ```ignore
//! let (sink, rx) = WatchSink::channel();
//! let cycler = PhraseCycler::new(PhraseList::default(), CyclerTiming::default(), sink);
//!
//! let handle = spawn_cycler(cycler, TokioTimer);
//! // ... render `rx` somewhere ...
//! let cycler = handle.shutdown().await?;
//! ```
//!
//! Stopping is a `watch` flag raced against the pending wait. Once a stop is
//! observed no further step runs, and the cycler is handed back to whoever
//! joins the task.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cycler::PhraseCycler;
use crate::display::DisplaySink;
use crate::error::CyclerError;
use crate::state::StepOutcome;
use crate::timer::Timer;

/// Drive `cycler` until `stop` turns `true` or its sender is dropped
///
/// Returns the cycler so its final state can be inspected or reused.
pub async fn run_cycler<S, T>(
    mut cycler: PhraseCycler<S>,
    timer: T,
    mut stop: watch::Receiver<bool>,
) -> PhraseCycler<S>
where
    S: DisplaySink,
    T: Timer,
{
    let stopped = *stop.borrow();
    if stopped {
        debug!("Stop already requested, cycler not started");
        return cycler;
    }
    info!(phrases = cycler.phrases().len(), "Phrase cycler started");

    let mut steps: u64 = 0;
    loop {
        let stopped = *stop.borrow();
        if stopped {
            break;
        }

        let outcome = cycler.step();
        steps += 1;

        tokio::select! {
            biased;

            () = stop_requested(&mut stop) => break,
            () = timer.wait(outcome.delay) => {}
        }
    }

    info!(steps, "Phrase cycler stopped");
    cycler
}

/// Resolve once a stop is requested or the handle is gone
async fn stop_requested(stop: &mut watch::Receiver<bool>) {
    // Err means the handle was dropped; treat it as a stop.
    let _ = stop.wait_for(|stopped| *stopped).await;
}

/// Run exactly `steps` steps, waiting on `timer` after each one
///
/// Useful for headless inspection and for tests driven by a
/// [`ManualTimer`](crate::timer::ManualTimer).
pub async fn run_steps<S, T>(
    cycler: &mut PhraseCycler<S>,
    timer: &T,
    steps: usize,
) -> Vec<StepOutcome>
where
    S: DisplaySink,
    T: Timer + ?Sized,
{
    let mut outcomes = Vec::with_capacity(steps);
    for _ in 0..steps {
        let outcome = cycler.step();
        timer.wait(outcome.delay).await;
        outcomes.push(outcome);
    }
    outcomes
}

/// Spawn `cycler` on the tokio runtime
///
/// The returned handle is the only way to stop it. Dropping the handle
/// stops the cycler at its next wait.
pub fn spawn_cycler<S, T>(cycler: PhraseCycler<S>, timer: T) -> CyclerHandle<S>
where
    S: DisplaySink + 'static,
    T: Timer + 'static,
{
    let (stop_tx, stop_rx) = watch::channel(false);
    let task = tokio::spawn(run_cycler(cycler, timer, stop_rx));
    CyclerHandle {
        stop: stop_tx,
        task,
    }
}

/// Handle to a spawned cycler task
#[derive(Debug)]
pub struct CyclerHandle<S> {
    stop: watch::Sender<bool>,
    task: JoinHandle<PhraseCycler<S>>,
}

impl<S> CyclerHandle<S> {
    /// Ask the cycler to stop
    ///
    /// The pending wait is abandoned and no further text is rendered.
    /// Calling this more than once has no further effect.
    pub fn stop(&self) {
        if !self.stop.send_replace(true) {
            debug!("Stop requested for phrase cycler");
        }
    }

    /// Whether a stop has been requested
    #[must_use]
    pub fn is_stopping(&self) -> bool {
        *self.stop.borrow()
    }

    /// Whether the task is still alive
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Wait for the task to finish and take the cycler back
    ///
    /// The cycler loops forever, so call [`stop`](Self::stop) first (or use
    /// [`shutdown`](Self::shutdown)) unless something else will stop it.
    ///
    /// # Errors
    ///
    /// Returns [`CyclerError::TaskFailed`] if the task panicked or was
    /// cancelled by the runtime.
    pub async fn join(self) -> Result<PhraseCycler<S>, CyclerError> {
        let Self { stop, task } = self;
        let result = task.await;
        drop(stop);
        result.map_err(|e| CyclerError::TaskFailed(e.to_string()))
    }

    /// Stop the cycler and wait for it to finish
    ///
    /// # Errors
    ///
    /// Same as [`join`](Self::join).
    pub async fn shutdown(self) -> Result<PhraseCycler<S>, CyclerError> {
        self.stop();
        self.join().await
    }
}
