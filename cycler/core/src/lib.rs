//! Cycler Core - Headless Typewriter Phrase Cycler
//!
//! This crate drives the typewriter line in the portfolio header: a phrase
//! is typed out one character at a time, held, deleted, and replaced by the
//! next phrase in the list, forever. It is independent of any UI framework;
//! a surface only has to provide a [`DisplaySink`] for the text.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   step()    ┌──────────────┐  set_text(S)  ┌─────────────┐
//! │    Driver    │ ──────────→ │ PhraseCycler │ ────────────→ │ DisplaySink │
//! │ (tokio task) │ ←────────── │ (state mach.)│               │ (TUI, test) │
//! └──────┬───────┘   delay     └──────────────┘               └─────────────┘
//!        │ wait(delay)
//!        ↓
//! ┌──────────────┐
//! │    Timer     │  TokioTimer | ManualTimer
//! └──────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`PhraseCycler`]: The state machine; one [`step`](PhraseCycler::step) per tick
//! - [`PhraseList`]: Validated, non-empty phrase list
//! - [`CyclerTiming`]: Typing, deleting and pause delays
//! - [`Timer`]: Deferred-execution facility the driver waits on
//! - [`CyclerHandle`]: Stop/join handle for a spawned cycler
//!
//! # Quick Start
//!
//! ```ignore
//! use cycler_core::{spawn_cycler, load_config, PhraseCycler, TokioTimer, WatchSink};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = load_config()?;
//!     let (sink, mut rx) = WatchSink::channel();
//!     let cycler = PhraseCycler::new(config.phrase_list()?, config.timing(), sink);
//!
//!     let handle = spawn_cycler(cycler, TokioTimer);
//!     while rx.changed().await.is_ok() {
//!         println!("{}", *rx.borrow());
//!     }
//!     handle.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`cycler`]: The phrase cycler state machine
//! - [`state`]: Cycler state record, phases and step outcomes
//! - [`phrases`]: Phrase and phrase list types
//! - [`timing`]: Pacing delays
//! - [`display`]: Display sink trait and implementations
//! - [`timer`]: Deferred-execution facility
//! - [`driver`]: Task that runs a cycler with start/stop control
//! - [`config`]: TOML + environment configuration
//! - [`error`]: Error types
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod cycler;
pub mod display;
pub mod driver;
pub mod error;
pub mod phrases;
pub mod state;
pub mod timer;
pub mod timing;

// Re-exports for convenience
pub use cycler::PhraseCycler;
pub use display::{DisplaySink, RecordingSink, WatchSink};
pub use driver::{run_cycler, run_steps, spawn_cycler, CyclerHandle};
pub use error::CyclerError;
pub use phrases::{Phrase, PhraseList, DEFAULT_PHRASES};
pub use state::{CyclerState, Phase, StepOutcome};
pub use timer::{ManualTimer, Timer, TokioTimer};
pub use timing::CyclerTiming;

// Config exports
pub use config::{
    apply_env_overrides, default_config_path, load_config, load_config_from_path,
    load_unvalidated, ConfigError, ConfigSource, CyclerConfig, CyclerToml,
};
