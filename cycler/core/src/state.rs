//! Cycler State
//!
//! The state record the cycler mutates on every step, plus the phases a step
//! can enter.
//!
//! # State Machine
//!
//! ```text
//!            ┌──────────────┐  full phrase   ┌────────────────────┐
//!  start ──→ │    Typing    │ ─────────────→ │ PauseBeforeDelete  │
//!            └──────────────┘                └─────────┬──────────┘
//!                   ↑                                  │
//!                   │                                  ↓
//!       ┌───────────┴─────────┐   display empty  ┌──────────────┐
//!       │   PauseBeforeNext   │ ←─────────────── │   Deleting   │
//!       └─────────────────────┘                  └──────────────┘
//! ```
//!
//! The phase reported for a step is the phase that step *entered*, and it
//! decides how long the driver waits before the next step.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Phase entered by a cycler step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// A character was added and the phrase is not complete yet
    Typing,
    /// The full phrase is showing; deletion starts after the long pause
    PauseBeforeDelete,
    /// A character was removed and some text remains
    Deleting,
    /// The display is empty; the next phrase starts after a short pause
    PauseBeforeNext,
}

impl Phase {
    /// Whether this phase is one of the two pauses around a phrase
    #[must_use]
    pub fn is_pause(self) -> bool {
        matches!(self, Self::PauseBeforeDelete | Self::PauseBeforeNext)
    }

    /// Short lowercase label for logs and status lines
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::PauseBeforeDelete => "pause-before-delete",
            Self::Deleting => "deleting",
            Self::PauseBeforeNext => "pause-before-next",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position of the cycler within its phrase list
///
/// Only the cycler's own step function mutates this record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclerState {
    pub(crate) phrase_index: usize,
    pub(crate) char_count: usize,
    pub(crate) deleting: bool,
}

impl CyclerState {
    /// The starting state: first phrase, nothing typed, typing forward
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }

    /// Index of the phrase being typed or deleted
    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Number of characters currently shown
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Whether the next step removes a character
    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}

/// Result of a single cycler step
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Text written to the display by this step
    pub rendered: String,
    /// Phase the step entered
    pub phase: Phase,
    /// Delay before the next step
    pub delay: Duration,
    /// Index of the phrase the rendered text came from
    pub phrase_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CyclerState::initial();
        assert_eq!(state.phrase_index(), 0);
        assert_eq!(state.char_count(), 0);
        assert!(!state.is_deleting());
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(Phase::Typing.to_string(), "typing");
        assert_eq!(Phase::PauseBeforeNext.to_string(), "pause-before-next");
        assert!(Phase::PauseBeforeDelete.is_pause());
        assert!(!Phase::Deleting.is_pause());
    }
}
