//! Grove - terminal browser for a Git repository served over HTTP
//!
//! Binary entry point for the TUI application.

use std::fs::File;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use grove::api::HttpBackend;
use grove::app::App;
use grove::config::{Cli, Config, LOG_FILTER_ENV};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::from_cli(Cli::parse())?;
    init_tracing(&config.log_file)?;
    info!(api_url = %config.api_url, start = %config.start, "starting");

    let backend = Arc::new(HttpBackend::new(config.api_url));
    let app = App::new(backend, config.start);

    let terminal = ratatui::init();
    let _restore = scopeguard::guard((), |_| ratatui::restore());
    run(terminal, app)
}

/// Write `tracing` events to `log_path`; the terminal belongs to the UI
fn init_tracing(log_path: &Path) -> color_eyre::Result<()> {
    let file = File::options().create(true).append(true).open(log_path)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init()
        .map_err(|error| color_eyre::eyre::eyre!(error))?;

    Ok(())
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Polls for 200ms, or 50ms while requests are in flight so their results
/// are drawn promptly. Fetch results are applied on every pass.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    let timeout = if app.fetches_in_flight() > 0 {
        Duration::from_millis(50)
    } else {
        Duration::from_millis(200)
    };
    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    } else {
        app.clear_expired_notification();
    }
    app.resolve_pending_fetches();
    Ok(())
}
