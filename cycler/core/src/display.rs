//! Display Sinks
//!
//! The cycler's only output is "set the displayed text to S". A
//! [`DisplaySink`] is whatever receives that text: a watch channel feeding a
//! UI surface, a recording buffer in tests, or nothing at all.
//!
//! An absent display (`None`) is a silent no-op rather than an error, so a
//! surface that has not mounted its text target yet never takes the cycler
//! down with it.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

/// Target the cycler writes its rendered text to
pub trait DisplaySink: Send {
    /// Replace the displayed text
    fn set_text(&mut self, text: &str);
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }
}

impl<S: DisplaySink> DisplaySink for Option<S> {
    fn set_text(&mut self, text: &str) {
        match self {
            Some(sink) => sink.set_text(text),
            None => tracing::trace!(len = text.len(), "No display attached, dropping frame"),
        }
    }
}

/// Publishes the latest text on a `tokio::sync::watch` channel
///
/// Surfaces hold a receiver and redraw when it changes. Publishing never
/// fails, even after every receiver has gone away.
#[derive(Debug)]
pub struct WatchSink {
    tx: watch::Sender<String>,
}

impl WatchSink {
    /// Create a sink and its first receiver, starting from empty text
    #[must_use]
    pub fn channel() -> (Self, watch::Receiver<String>) {
        let (tx, rx) = watch::channel(String::new());
        (Self { tx }, rx)
    }

    /// Add another receiver
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }

    /// The most recently published text
    #[must_use]
    pub fn current(&self) -> String {
        self.tx.borrow().clone()
    }
}

impl DisplaySink for WatchSink {
    fn set_text(&mut self, text: &str) {
        self.tx.send_replace(text.to_owned());
    }
}

/// Records every frame written to it
///
/// Clones share one buffer, so a test can hand one clone to a cycler (even
/// one running on another task) and inspect frames through the other.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    frames: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every frame so far, oldest first
    #[must_use]
    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().clone()
    }

    /// The most recent frame
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.frames.lock().last().cloned()
    }

    /// Number of frames recorded
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.lock().len()
    }

    /// Whether nothing has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.lock().is_empty()
    }

    /// Forget all recorded frames
    pub fn clear(&self) {
        self.frames.lock().clear();
    }
}

impl DisplaySink for RecordingSink {
    fn set_text(&mut self, text: &str) {
        self.frames.lock().push(text.to_owned());
    }
}
