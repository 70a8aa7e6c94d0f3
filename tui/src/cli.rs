//! Command-Line Options
//!
//! Flags for the terminal header and how they combine with the TOML
//! configuration from `cycler-core`.

use std::path::PathBuf;

use clap::Parser;
use cycler_core::{default_config_path, load_unvalidated, ConfigError, CyclerConfig};

use crate::app::AppOptions;

/// Portfolio header with a typewriter subtitle
#[derive(Debug, Parser)]
#[command(name = "cycler-tui", version, about)]
pub struct Args {
    /// Config file (defaults to ~/.config/portfolio/typewriter.toml)
    #[arg(long, env = "TYPEWRITER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Phrase to cycle through; repeat for several (overrides the config)
    #[arg(long = "phrase", value_name = "TEXT")]
    pub phrases: Vec<String>,

    /// Name shown on the first line
    #[arg(long, default_value = "Portfolio")]
    pub name: String,

    /// Text shown before the typewriter phrase
    #[arg(long, default_value = "I'm a ")]
    pub lead: String,

    /// Do not draw the blinking cursor
    #[arg(long)]
    pub no_cursor: bool,
}

impl Args {
    /// Resolve the cycler configuration: file, then environment, then CLI
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or if
    /// the final configuration is invalid.
    pub fn resolve_config(&self) -> Result<CyclerConfig, ConfigError> {
        let path = self.config.clone().or_else(default_config_path);
        let mut config = load_unvalidated(path)?;
        config.apply_cli_phrases(self.phrases.clone());
        config.validate()?;
        Ok(config)
    }

    /// Header options for the App
    #[must_use]
    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            name: self.name.clone(),
            lead: self.lead.clone(),
            show_cursor: !self.no_cursor,
        }
    }
}
