//! sheet-tui - Bottom action sheet demo for the terminal.
//!
//! Responsibilities:
//! - Orchestrate startup and shutdown.
//! - Initialize logging, configuration, and the terminal.
//! - Run the main event loop.
//!
//! Invariants:
//! - The TUI enters raw mode and the alternate screen on startup.
//! - Configuration precedence: CLI args > env vars > config file > defaults.
//! - Mouse capture is enabled unless `--no-mouse` is specified.
//! - Sheet notifications are drained and applied before every draw.

use anyhow::{Context, Result};
use clap::Parser;
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use sheet_config::ConfigLoader;
use sheet_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use sheet_tui::app::App;
use sheet_tui::cli::Cli;
use sheet_tui::event::Event;
use sheet_tui::runtime::{logging::init_logging, terminal::TerminalGuard};
use sheet_tui::ui::action_sheet::SheetEvent;
use tokio::sync::mpsc::{channel, error::TrySendError};
use tokio_util::task::TaskTracker;

fn load_defaults(cli: &Cli) -> Result<sheet_config::SheetDefaults> {
    let mut loader = ConfigLoader::new().load_dotenv()?;
    if let Some(path) = &cli.config_path {
        loader = loader.with_config_path(path.clone());
    }
    let mut loader = loader.from_file()?.from_env()?;

    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }
    if let Some(value) = cli.close_on_click_action {
        loader = loader.with_close_on_click_action(value);
    }
    if let Some(value) = cli.close_on_popstate {
        loader = loader.with_close_on_popstate(value);
    }
    if let Some(name) = &cli.close_icon {
        loader = loader.with_close_icon(name.clone());
    }
    Ok(loader.build())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    // Must live for the whole of main so buffered log lines are flushed.
    let _log_guard = init_logging(&cli.log_dir).context("failed to initialize logging")?;

    let defaults = load_defaults(&cli).context("failed to load configuration")?;
    tracing::info!(?defaults, "Configuration loaded");

    let (sheet_tx, mut sheet_rx) = channel::<SheetEvent>(DEFAULT_CHANNEL_CAPACITY);
    let mut app = App::new(&defaults, sheet_tx).with_labels(
        cli.title.clone(),
        cli.description.clone(),
        cli.cancel_text.clone(),
    );

    let task_tracker = TaskTracker::new();

    let mut stdout = std::io::stdout();
    let _terminal_guard = TerminalGuard::enter(&mut stdout, no_mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let (tx, mut rx) = channel::<Event>(DEFAULT_CHANNEL_CAPACITY);

    // Keys and resizes wait for capacity; mouse events are dropped when the queue is full.
    let tx_input = tx.clone();
    task_tracker.spawn(async move {
        let mut reader = crossterm::event::EventStream::new();
        while let Some(event_result) = reader.next().await {
            let event = match event_result {
                Ok(event) => event,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read terminal event");
                    continue;
                }
            };
            let Some(event) = Event::from_crossterm(event) else {
                continue;
            };
            if event.is_critical() {
                if tx_input.send(event).await.is_err() {
                    break;
                }
            } else {
                match tx_input.try_send(event) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Input channel full, dropping mouse event");
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
            }
        }
    });
    drop(tx);

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        app.drain(&mut sheet_rx);
        if app.should_quit {
            break;
        }
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            event = rx.recv() => match event {
                Some(event) => app.handle_event(event),
                None => break,
            },
            _ = tick_interval.tick() => app.handle_event(Event::Tick),
        }
    }

    tracing::info!("Shutting down");
    let _ = task_tracker.close();
    // The input task blocks on the terminal; dropping the receiver ends it on its next event.
    drop(rx);

    terminal.show_cursor()?;
    Ok(())
}
