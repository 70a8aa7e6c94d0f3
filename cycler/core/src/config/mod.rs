//! TOML Configuration File Support
//!
//! Loads the phrase list and pacing for the typewriter header from
//! `~/.config/portfolio/typewriter.toml`.
//!
//! # Configuration Priority
//!
//! Configuration values are loaded with the following priority (highest first):
//! 1. CLI arguments (applied by the caller)
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [typewriter]
//! phrases = ["Software Developer", "Data Scientist", "Creative Coder"]
//!
//! [timing]
//! type_delay_ms = 100
//! delete_delay_ms = 50
//! pause_before_delete_ms = 1500
//! pause_before_next_ms = 400
//! ```
//!
//! # Environment Variables
//!
//! - `TYPEWRITER_PHRASES`: phrases separated by `|`
//! - `TYPEWRITER_TYPE_DELAY_MS`
//! - `TYPEWRITER_DELETE_DELAY_MS`
//! - `TYPEWRITER_PAUSE_BEFORE_DELETE_MS`
//! - `TYPEWRITER_PAUSE_BEFORE_NEXT_MS`

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::CyclerError;
use crate::phrases::{PhraseList, DEFAULT_PHRASES};
use crate::timing::CyclerTiming;

/// Environment variable holding `|`-separated phrases
pub const ENV_PHRASES: &str = "TYPEWRITER_PHRASES";
/// Environment variable overriding the typing delay
pub const ENV_TYPE_DELAY_MS: &str = "TYPEWRITER_TYPE_DELAY_MS";
/// Environment variable overriding the delete delay
pub const ENV_DELETE_DELAY_MS: &str = "TYPEWRITER_DELETE_DELAY_MS";
/// Environment variable overriding the pause after a full phrase
pub const ENV_PAUSE_BEFORE_DELETE_MS: &str = "TYPEWRITER_PAUSE_BEFORE_DELETE_MS";
/// Environment variable overriding the pause before the next phrase
pub const ENV_PAUSE_BEFORE_NEXT_MS: &str = "TYPEWRITER_PAUSE_BEFORE_NEXT_MS";

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl From<CyclerError> for ConfigError {
    fn from(err: CyclerError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// `[typewriter]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterToml {
    /// Phrases to cycle through, in order
    pub phrases: Option<Vec<String>>,
}

/// `[timing]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingToml {
    /// Delay after each typed character
    pub type_delay_ms: Option<u64>,
    /// Delay after each deleted character
    pub delete_delay_ms: Option<u64>,
    /// Pause once the full phrase is showing
    pub pause_before_delete_ms: Option<u64>,
    /// Pause once the display is empty
    pub pause_before_next_ms: Option<u64>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CyclerToml {
    /// Phrase section
    pub typewriter: TypewriterToml,
    /// Pacing section
    pub timing: TimingToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved configuration for a phrase cycler
///
/// Use [`load_config`] to load with proper priority handling, then
/// [`phrase_list`](Self::phrase_list) and [`timing`](Self::timing) to get
/// validated runtime values.
#[derive(Clone, Debug)]
pub struct CyclerConfig {
    /// Phrases to cycle through
    pub phrases: Vec<String>,

    /// Pacing for the cycle
    pub timing: CyclerTiming,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_string()).collect(),
            timing: CyclerTiming::default(),
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl CyclerConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Replace the phrases with values given on the command line
    ///
    /// An empty `phrases` leaves the current list in place.
    pub fn apply_cli_phrases(&mut self, phrases: Vec<String>) {
        if !phrases.is_empty() {
            self.phrases = phrases;
            self.set_source(ConfigSource::Cli);
        }
    }

    /// Check that this configuration can drive a cycler
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] when the phrase list is
    /// empty or a per-character delay is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phrases.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one phrase must be configured".to_string(),
            ));
        }
        self.timing.validate()?;
        Ok(())
    }

    /// Build the validated phrase list
    ///
    /// # Errors
    ///
    /// Returns [`CyclerError::EmptyPhraseList`] if no phrases are configured.
    pub fn phrase_list(&self) -> Result<PhraseList, CyclerError> {
        PhraseList::new(self.phrases.iter().map(String::as_str))
    }

    /// The configured pacing
    #[must_use]
    pub fn timing(&self) -> CyclerTiming {
        self.timing
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/portfolio/typewriter.toml` or
/// `~/.config/portfolio/typewriter.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("portfolio").join("typewriter.toml"))
}

/// Load configuration from all sources with proper priority
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed,
/// or if the resulting configuration is invalid. A missing config file is
/// not an error (defaults are used).
pub fn load_config() -> Result<CyclerConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path
///
/// # Arguments
///
/// * `path` - Optional path to the configuration file. If `None`, only defaults
///   and environment variables are used.
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed,
/// or if the resulting configuration is invalid.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<CyclerConfig, ConfigError> {
    let config = load_unvalidated(path)?;
    config.validate()?;
    Ok(config)
}

/// Load defaults, the TOML file and environment overrides without validating
///
/// Callers that layer CLI values on top use this, then call
/// [`CyclerConfig::validate`] once everything is applied.
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed.
pub fn load_unvalidated(path: Option<PathBuf>) -> Result<CyclerConfig, ConfigError> {
    let mut config = load_file_config(path)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

/// Load defaults and the TOML file only, without environment overrides
fn load_file_config(path: Option<PathBuf>) -> Result<CyclerConfig, ConfigError> {
    let mut config = CyclerConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: CyclerToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.set_source(ConfigSource::File);

            tracing::info!(
                path = %config_path.display(),
                phrases = config.phrases.len(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut CyclerConfig, toml: &CyclerToml) {
    if let Some(ref phrases) = toml.typewriter.phrases {
        config.phrases.clone_from(phrases);
    }

    let timing = &toml.timing;
    if let Some(ms) = timing.type_delay_ms {
        config.timing.type_delay = Duration::from_millis(ms);
    }
    if let Some(ms) = timing.delete_delay_ms {
        config.timing.delete_delay = Duration::from_millis(ms);
    }
    if let Some(ms) = timing.pause_before_delete_ms {
        config.timing.pause_before_delete = Duration::from_millis(ms);
    }
    if let Some(ms) = timing.pause_before_next_ms {
        config.timing.pause_before_next = Duration::from_millis(ms);
    }
}

/// Apply environment overrides using `lookup` to read variables
///
/// [`load_config_from_path`] passes `|key| std::env::var(key).ok()`.
pub fn apply_env_overrides<F>(config: &mut CyclerConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let mut applied = false;

    if let Some(raw) = lookup(ENV_PHRASES) {
        let phrases: Vec<String> = raw.split('|').map(|p| p.trim().to_string()).collect();
        if phrases.iter().all(String::is_empty) {
            tracing::warn!(var = ENV_PHRASES, "Ignoring empty phrase override");
        } else {
            config.phrases = phrases;
            applied = true;
        }
    }

    let overrides: [(&str, &mut Duration); 4] = [
        (ENV_TYPE_DELAY_MS, &mut config.timing.type_delay),
        (ENV_DELETE_DELAY_MS, &mut config.timing.delete_delay),
        (ENV_PAUSE_BEFORE_DELETE_MS, &mut config.timing.pause_before_delete),
        (ENV_PAUSE_BEFORE_NEXT_MS, &mut config.timing.pause_before_next),
    ];
    for (var, slot) in overrides {
        let Some(raw) = lookup(var) else { continue };
        match raw.trim().parse::<u64>() {
            Ok(ms) => {
                *slot = Duration::from_millis(ms);
                applied = true;
            }
            Err(e) => tracing::warn!(var, value = %raw, error = %e, "Ignoring invalid delay"),
        }
    }

    if applied {
        config.set_source(ConfigSource::Env);
    }
}
