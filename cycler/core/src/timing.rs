//! Cycler Timing
//!
//! Pacing for the typewriter loop. Each [`Phase`] the cycler enters maps to
//! one of four delays: a short per-character typing delay, a faster
//! per-character delete delay, and two pauses around a completed phrase.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CyclerError;
use crate::state::Phase;

/// Default delay between typed characters
pub const DEFAULT_TYPE_DELAY_MS: u64 = 100;

/// Default delay between deleted characters
pub const DEFAULT_DELETE_DELAY_MS: u64 = 50;

/// Default pause after a phrase is fully typed
pub const DEFAULT_PAUSE_BEFORE_DELETE_MS: u64 = 1500;

/// Default pause after a phrase is fully deleted
pub const DEFAULT_PAUSE_BEFORE_NEXT_MS: u64 = 400;

/// Delays that pace the type/delete cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclerTiming {
    /// Delay after each typed character
    pub type_delay: Duration,
    /// Delay after each deleted character
    pub delete_delay: Duration,
    /// Pause once the full phrase is showing
    pub pause_before_delete: Duration,
    /// Pause once the display is empty, before the next phrase starts
    pub pause_before_next: Duration,
}

impl Default for CyclerTiming {
    fn default() -> Self {
        Self::from_millis(
            DEFAULT_TYPE_DELAY_MS,
            DEFAULT_DELETE_DELAY_MS,
            DEFAULT_PAUSE_BEFORE_DELETE_MS,
            DEFAULT_PAUSE_BEFORE_NEXT_MS,
        )
    }
}

impl CyclerTiming {
    /// Build timing from millisecond values
    #[must_use]
    pub fn from_millis(
        type_delay_ms: u64,
        delete_delay_ms: u64,
        pause_before_delete_ms: u64,
        pause_before_next_ms: u64,
    ) -> Self {
        Self {
            type_delay: Duration::from_millis(type_delay_ms),
            delete_delay: Duration::from_millis(delete_delay_ms),
            pause_before_delete: Duration::from_millis(pause_before_delete_ms),
            pause_before_next: Duration::from_millis(pause_before_next_ms),
        }
    }

    /// Set the per-character typing delay
    #[must_use]
    pub fn with_type_delay(mut self, delay: Duration) -> Self {
        self.type_delay = delay;
        self
    }

    /// Set the per-character delete delay
    #[must_use]
    pub fn with_delete_delay(mut self, delay: Duration) -> Self {
        self.delete_delay = delay;
        self
    }

    /// Set the pause after a completed phrase
    #[must_use]
    pub fn with_pause_before_delete(mut self, delay: Duration) -> Self {
        self.pause_before_delete = delay;
        self
    }

    /// Set the pause before the next phrase
    #[must_use]
    pub fn with_pause_before_next(mut self, delay: Duration) -> Self {
        self.pause_before_next = delay;
        self
    }

    /// Delay to wait after a step that entered `phase`
    #[must_use]
    pub fn delay_for(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Typing => self.type_delay,
            Phase::PauseBeforeDelete => self.pause_before_delete,
            Phase::Deleting => self.delete_delay,
            Phase::PauseBeforeNext => self.pause_before_next,
        }
    }

    /// Duration of one full type + delete cycle of a phrase `chars` long
    ///
    /// Saturates at [`Duration::MAX`] for delays too large to add up.
    #[must_use]
    pub fn cycle_duration(&self, chars: usize) -> Duration {
        let pauses = self.pause_before_delete.saturating_add(self.pause_before_next);
        if chars == 0 {
            return pauses;
        }
        let gaps = u32::try_from(chars - 1).unwrap_or(u32::MAX);
        self.type_delay
            .saturating_mul(gaps)
            .saturating_add(self.delete_delay.saturating_mul(gaps))
            .saturating_add(pauses)
    }

    /// Check that the per-character delays can drive a timer
    ///
    /// Pauses may be zero; per-character delays may not, since a zero delay
    /// would reschedule the next step without ever yielding to the clock.
    ///
    /// # Errors
    ///
    /// Returns [`CyclerError::InvalidTiming`] naming the offending field.
    pub fn validate(&self) -> Result<(), CyclerError> {
        if self.type_delay.is_zero() {
            return Err(CyclerError::InvalidTiming(
                "type_delay must be non-zero".to_string(),
            ));
        }
        if self.delete_delay.is_zero() {
            return Err(CyclerError::InvalidTiming(
                "delete_delay must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let timing = CyclerTiming::default();
        assert_eq!(timing.type_delay, Duration::from_millis(100));
        assert_eq!(timing.delete_delay, Duration::from_millis(50));
        assert_eq!(timing.pause_before_delete, Duration::from_millis(1500));
        assert_eq!(timing.pause_before_next, Duration::from_millis(400));
        assert!(timing.validate().is_ok());
    }

    #[test]
    fn test_delay_for_phase() {
        let timing = CyclerTiming::default();
        assert_eq!(timing.delay_for(Phase::Typing), timing.type_delay);
        assert_eq!(timing.delay_for(Phase::Deleting), timing.delete_delay);
        assert_eq!(
            timing.delay_for(Phase::PauseBeforeDelete),
            timing.pause_before_delete
        );
        assert_eq!(
            timing.delay_for(Phase::PauseBeforeNext),
            timing.pause_before_next
        );
    }

    #[test]
    fn test_zero_character_delays_rejected() {
        let timing = CyclerTiming::default().with_type_delay(Duration::ZERO);
        assert!(matches!(
            timing.validate(),
            Err(CyclerError::InvalidTiming(msg)) if msg.contains("type_delay")
        ));

        let timing = CyclerTiming::default().with_delete_delay(Duration::ZERO);
        assert!(matches!(
            timing.validate(),
            Err(CyclerError::InvalidTiming(msg)) if msg.contains("delete_delay")
        ));
    }

    #[test]
    fn test_zero_pauses_allowed() {
        let timing = CyclerTiming::default()
            .with_pause_before_delete(Duration::ZERO)
            .with_pause_before_next(Duration::ZERO);
        assert!(timing.validate().is_ok());
    }

    #[test]
    fn test_cycle_duration() {
        let timing = CyclerTiming::default();
        // "Hi": 1 typing gap, pause, 1 deleting gap, pause
        assert_eq!(timing.cycle_duration(2), Duration::from_millis(2050));
        assert_eq!(timing.cycle_duration(0), Duration::from_millis(1900));
    }

    #[test]
    fn test_cycle_duration_saturates() {
        let timing = CyclerTiming::from_millis(u64::MAX, u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(timing.cycle_duration(10_000), Duration::MAX);
        assert_eq!(timing.cycle_duration(0), Duration::MAX);
    }
}
