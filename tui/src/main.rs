//! Cycler TUI Entry Point
//!
//! Launches the terminal portfolio header.
//!
//! Usage:
//!   cycler-tui [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Config file (default: ~/.config/portfolio/typewriter.toml)
//!   --phrase <TEXT>   Phrase to cycle; repeatable, overrides the config
//!   --name <NAME>     Name on the first line
//!   --lead <TEXT>     Text before the typewriter phrase
//!   --no-cursor       Hide the blinking cursor
//!
//! Logging is off unless `RUST_LOG` is set, in which case it goes to
//! `~/.cache/portfolio/typewriter.log` so the alternate screen stays clean.

use std::fs;
use std::io::{self, IsTerminal};
use std::panic;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cycler_core::{spawn_cycler, PhraseCycler, TokioTimer, WatchSink};
use cycler_tui::app::CrosstermTerminal;
use cycler_tui::{App, Args};

/// Send logs to a file when `RUST_LOG` is set
fn init_logging() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let Some(dir) = dirs::cache_dir().map(|d| d.join("portfolio")) else {
        return Ok(());
    };
    fs::create_dir_all(&dir)?;
    let file = fs::File::create(dir.join("typewriter.log"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging()?;

    // Configuration errors surface before the terminal is touched
    let config = args.resolve_config()?;
    let phrases = config.phrase_list()?;
    tracing::info!(
        phrases = phrases.len(),
        source = %config.source(),
        "Configuration resolved"
    );

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("❌ Error: cycler-tui requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means:");
        eprintln!("  • Running in a non-interactive environment (CI, container)");
        eprintln!("  • SSH without -t flag");
        eprintln!("  • Piped stdin/stdout");
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal: CrosstermTerminal = Terminal::new(backend)?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    // Start the cycler once its display exists
    let (sink, text_rx) = WatchSink::channel();
    let cycler = PhraseCycler::new(phrases, config.timing(), sink);
    let handle = spawn_cycler(cycler, TokioTimer);

    // Run the app
    let mut app = App::new(args.app_options(), text_rx);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match handle.shutdown().await {
        Ok(cycler) => tracing::info!(
            phrase_index = cycler.state().phrase_index(),
            "Phrase cycler shut down"
        ),
        Err(e) => tracing::warn!("Phrase cycler did not shut down cleanly: {}", e),
    }

    // Propagate any errors
    result
}
