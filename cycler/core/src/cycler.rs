//! Phrase Cycler
//!
//! Types a phrase out one character at a time, pauses, deletes it one
//! character at a time, pauses again, and moves on to the next phrase,
//! forever.
//!
//! # Design
//!
//! [`PhraseCycler::step`] is the whole animation: one transition, one write
//! to the display, and the delay until the next step. It never touches a
//! clock, so the driver in [`crate::driver`] (or a test) decides how that
//! delay is waited out.

use tracing::{debug, trace};

use crate::display::DisplaySink;
use crate::error::CyclerError;
use crate::phrases::{Phrase, PhraseList};
use crate::state::{CyclerState, Phase, StepOutcome};
use crate::timing::CyclerTiming;

/// Typewriter animation over a fixed phrase list
#[derive(Debug)]
pub struct PhraseCycler<S> {
    phrases: PhraseList,
    timing: CyclerTiming,
    state: CyclerState,
    sink: S,
}

impl<S: DisplaySink> PhraseCycler<S> {
    /// Create a cycler at the start of the first phrase
    pub fn new(phrases: PhraseList, timing: CyclerTiming, sink: S) -> Self {
        Self {
            phrases,
            timing,
            state: CyclerState::initial(),
            sink,
        }
    }

    /// Validate raw phrases and create a cycler
    ///
    /// # Errors
    ///
    /// Returns [`CyclerError::EmptyPhraseList`] if `phrases` is empty, or
    /// [`CyclerError::InvalidTiming`] if `timing` cannot drive a timer.
    pub fn from_phrases<I, T>(phrases: I, timing: CyclerTiming, sink: S) -> Result<Self, CyclerError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Phrase>,
    {
        let phrases = PhraseList::new(phrases)?;
        timing.validate()?;
        Ok(Self::new(phrases, timing, sink))
    }

    /// Advance the animation by one step
    ///
    /// Writes exactly once to the display and returns what was written,
    /// the phase entered, and how long to wait before the next step.
    pub fn step(&mut self) -> StepOutcome {
        let phrase_index = self.state.phrase_index;
        let phrase = self.phrases.get(phrase_index);
        let len = phrase.char_len();

        let phase = if self.state.deleting {
            self.state.char_count = self.state.char_count.saturating_sub(1);
            if self.state.char_count == 0 {
                Phase::PauseBeforeNext
            } else {
                Phase::Deleting
            }
        } else {
            // An empty phrase is already complete: nothing to type.
            if self.state.char_count < len {
                self.state.char_count += 1;
            }
            if self.state.char_count == len {
                Phase::PauseBeforeDelete
            } else {
                Phase::Typing
            }
        };

        let rendered = phrase.prefix(self.state.char_count).to_owned();
        self.sink.set_text(&rendered);

        match phase {
            Phase::PauseBeforeDelete => {
                self.state.deleting = true;
                debug!(phrase_index, phrase = %phrase, "Phrase complete, pausing before delete");
            }
            Phase::PauseBeforeNext => {
                self.state.deleting = false;
                self.state.phrase_index = self.phrases.next_index(phrase_index);
                debug!(
                    next_index = self.state.phrase_index,
                    "Phrase cleared, pausing before next"
                );
            }
            Phase::Typing | Phase::Deleting => {}
        }

        let delay = self.timing.delay_for(phase);
        trace!(
            phrase_index,
            char_count = self.state.char_count,
            %phase,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "Cycler step"
        );

        StepOutcome {
            rendered,
            phase,
            delay,
            phrase_index,
        }
    }

    /// Return to the first phrase with nothing typed
    ///
    /// The display is left as it is; the next step overwrites it.
    pub fn reset(&mut self) {
        self.state = CyclerState::initial();
    }
}

impl<S> PhraseCycler<S> {
    /// Current position in the cycle
    #[must_use]
    pub fn state(&self) -> CyclerState {
        self.state
    }

    /// The phrases being cycled
    #[must_use]
    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    /// Pacing in use
    #[must_use]
    pub fn timing(&self) -> &CyclerTiming {
        &self.timing
    }

    /// Phrase currently being typed or deleted
    #[must_use]
    pub fn current_phrase(&self) -> &Phrase {
        self.phrases.get(self.state.phrase_index)
    }

    /// The display sink
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Take the display sink back
    pub fn into_sink(self) -> S {
        self.sink
    }
}
