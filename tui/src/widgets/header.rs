//! Header Widget
//!
//! The portfolio header: the owner's name on one line and, beneath it, a
//! lead-in followed by the typewriter phrase and a blinking cursor. Both
//! lines are centered horizontally and the pair is centered vertically.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::theme;

/// Glyph drawn after the typed text
pub const CURSOR_SYMBOL: &str = "▌";

/// Time the cursor stays on (and then off)
pub const CURSOR_BLINK_PERIOD: Duration = Duration::from_millis(500);

/// Whether a blinking cursor is lit `elapsed` after it started
#[must_use]
pub fn cursor_visible_at(elapsed: Duration) -> bool {
    (elapsed.as_millis() / CURSOR_BLINK_PERIOD.as_millis()) % 2 == 0
}

/// Name line plus typewriter line
pub struct Header<'a> {
    name: &'a str,
    lead: &'a str,
    typed: &'a str,
    cursor: bool,
}

impl<'a> Header<'a> {
    pub fn new(name: &'a str, lead: &'a str, typed: &'a str) -> Self {
        Self {
            name,
            lead,
            typed,
            cursor: false,
        }
    }

    /// Draw the cursor after the typed text
    pub fn cursor(mut self, visible: bool) -> Self {
        self.cursor = visible;
        self
    }

    /// Width of the typewriter line when the phrase is `typed`
    ///
    /// The cursor cell is always reserved so the line does not jitter as
    /// the cursor blinks.
    fn line_width(&self) -> u16 {
        let width = self.lead.width() + self.typed.width() + CURSOR_SYMBOL.width();
        u16::try_from(width).unwrap_or(u16::MAX)
    }
}

fn centered_x(area: Rect, width: u16) -> u16 {
    area.x + area.width.saturating_sub(width) / 2
}

fn put(buf: &mut Buffer, x: u16, y: u16, text: &str, max_x: u16, style: Style) -> u16 {
    if x >= max_x {
        return x;
    }
    let (end, _) = buf.set_stringn(x, y, text, usize::from(max_x - x), style);
    end
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let top = area.y + (area.height - 2) / 2;
        let max_x = area.x + area.width;

        let name_width = u16::try_from(self.name.width()).unwrap_or(u16::MAX);
        put(
            buf,
            centered_x(area, name_width),
            top,
            self.name,
            max_x,
            theme::name_style(),
        );

        // The line is centered on the full phrase width so far, which makes
        // it grow from the middle as characters are typed.
        let y = top + 1;
        let x = centered_x(area, self.line_width());
        let x = put(buf, x, y, self.lead, max_x, theme::lead_style());
        let x = put(buf, x, y, self.typed, max_x, theme::typed_style());
        if self.cursor {
            put(buf, x, y, CURSOR_SYMBOL, max_x, theme::cursor_style());
        }
    }
}
