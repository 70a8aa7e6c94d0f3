//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, resize)
//! - A watch receiver carrying the cycler's latest text
//! - Cursor blink and rendering
//!
//! The phrase cycler runs on its own task; the App never drives it. It only
//! redraws whatever text the cycler last published.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use tokio::sync::watch;

use crate::theme;
use crate::widgets::{cursor_visible_at, Header};

/// Cap redraws at ~30 FPS
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Footer hint
const QUIT_HINT: &str = "Esc / q to quit";

/// Options that shape the header
#[derive(Clone, Debug)]
pub struct AppOptions {
    /// Owner's name on the first line
    pub name: String,
    /// Text shown before the typewriter phrase
    pub lead: String,
    /// Whether to draw the blinking cursor
    pub show_cursor: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            lead: "I'm a ".to_string(),
            show_cursor: true,
        }
    }
}

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// Header options
    options: AppOptions,
    /// Latest text from the cycler
    text_rx: watch::Receiver<String>,
    /// Text currently drawn
    typed: String,
    /// False once the cycler's sender is gone
    cycler_alive: bool,
    /// When the cursor blink started (reset on every change)
    blink_origin: Instant,
    /// Cursor state for the current frame
    cursor_lit: bool,
}

impl App {
    /// Create a new App reading text from `text_rx`
    pub fn new(options: AppOptions, text_rx: watch::Receiver<String>) -> Self {
        let typed = text_rx.borrow().clone();
        Self {
            running: true,
            cursor_lit: options.show_cursor,
            options,
            text_rx,
            typed,
            cycler_alive: true,
            blink_origin: Instant::now(),
        }
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        // Create async event stream for non-blocking terminal events
        let mut event_stream = EventStream::new();

        // Render initial frame immediately so user sees UI
        terminal.draw(|frame| self.draw(frame))?;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(&event),
                        Some(Err(e)) => {
                            tracing::warn!("Terminal event error: {}", e);
                        }
                        None => self.running = false,
                    }
                }

                // New text from the cycler
                changed = self.text_rx.changed(), if self.cycler_alive => {
                    if changed.is_ok() {
                        self.sync_text();
                    } else {
                        tracing::info!("Phrase cycler stopped publishing");
                        self.cycler_alive = false;
                    }
                }

                // Frame tick keeps the cursor blinking
                () = tokio::time::sleep(FRAME_DURATION) => {}
            }

            self.tick(Instant::now());
            terminal.draw(|frame| self.draw(frame))?;

            // Frame rate limiting
            let elapsed = frame_start.elapsed();
            if elapsed < FRAME_DURATION {
                tokio::time::sleep(FRAME_DURATION - elapsed).await;
            }
        }

        Ok(())
    }

    /// Handle a terminal event
    pub fn handle_event(&mut self, event: &Event) {
        // Only handle Press events (not Release or Repeat)
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                self.handle_key(*key);
            }
        }
        // Resize needs no bookkeeping: the next draw uses the new size.
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            _ => {}
        }
    }

    /// Pull the latest text from the cycler
    ///
    /// The cursor stays lit while text is changing, as a real caret does
    /// while typing, and starts blinking again once the text settles.
    pub fn sync_text(&mut self) {
        let latest = self.text_rx.borrow_and_update().clone();
        if latest != self.typed {
            self.typed = latest;
            self.blink_origin = Instant::now();
        }
    }

    /// Update cursor blink for the frame drawn at `now`
    pub fn tick(&mut self, now: Instant) {
        self.cursor_lit = self.options.show_cursor
            && cursor_visible_at(now.saturating_duration_since(self.blink_origin));
    }

    /// Draw the whole UI
    pub fn draw(&self, frame: &mut Frame) {
        let [body, footer] =
            Layout::vertical([Constraint::Min(2), Constraint::Length(1)]).areas(frame.area());

        frame.render_widget(
            Header::new(&self.options.name, &self.options.lead, &self.typed)
                .cursor(self.cursor_lit),
            body,
        );
        frame.render_widget(
            Paragraph::new(Line::styled(QUIT_HINT, theme::hint_style())).centered(),
            footer,
        );
    }

    /// Whether the event loop should keep going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Text currently drawn
    pub fn typed(&self) -> &str {
        &self.typed
    }

    /// Whether the cursor is lit this frame
    pub fn cursor_lit(&self) -> bool {
        self.cursor_lit
    }
}

/// Convenience for callers that own a crossterm terminal
pub type CrosstermTerminal = Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>;
