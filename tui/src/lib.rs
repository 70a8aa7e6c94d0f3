//! Cycler TUI - Terminal portfolio header
//!
//! Draws the portfolio header in the terminal: the owner's name and a
//! typewriter line that types, holds, and deletes each phrase in turn.
//!
//! # Architecture
//!
//! - **App**: Event loop, watch receiver for the cycler's text, cursor blink
//! - **Widgets**: The header widget
//! - **Cli**: Command-line options and config resolution
//! - **Theme**: Colors
//!
//! The animation itself lives in `cycler-core`; this crate only displays it.

pub mod app;
pub mod cli;
pub mod theme;
pub mod widgets;

pub use app::{App, AppOptions};
pub use cli::Args;
