//! Error Types
//!
//! Failures the cycler can report. Configuration loading has its own
//! [`ConfigError`](crate::config::ConfigError).

use thiserror::Error;

/// Errors raised while building or driving a phrase cycler
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CyclerError {
    /// The phrase list had no entries, so there is nothing to cycle through
    #[error("phrase list is empty: at least one phrase is required")]
    EmptyPhraseList,

    /// A pacing value cannot drive the animation
    #[error("invalid timing: {0}")]
    InvalidTiming(String),

    /// The driver task panicked or was aborted
    #[error("cycler task failed: {0}")]
    TaskFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CyclerError::EmptyPhraseList.to_string(),
            "phrase list is empty: at least one phrase is required"
        );
        assert_eq!(
            CyclerError::InvalidTiming("type_delay must be non-zero".into()).to_string(),
            "invalid timing: type_delay must be non-zero"
        );
    }
}
