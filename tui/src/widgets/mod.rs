//! Widgets
//!
//! Terminal widgets for the portfolio surface.

mod header;

pub use header::{cursor_visible_at, Header, CURSOR_BLINK_PERIOD, CURSOR_SYMBOL};
