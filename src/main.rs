// rowscope - Virtualized list viewport demo
//
// Scrolls a generated dataset of a million rows (by default) through the
// virtual viewport, or through the classic materialized menu with --classic
// for comparison. Enter picks a row, which is printed after the terminal is
// restored.
//
// Architecture:
// - Source: synthetic rows derived from their id, never materialized
// - Viewport: window finding, self-sizing and the scroll indicator
// - TUI (ratatui): host loop, status bar and clipboard
// - Logging: tracing into an in-memory buffer (and optional rotating files)

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use rowscope::config::{Config, LoggingConfig};
use rowscope::logging::{LogBuffer, TuiLogLayer};
use rowscope::source::GeneratedSource;
use rowscope::tui::{
    self,
    components::{ListPanel, MenuPanel, RowsPanel},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle CLI commands first (config --show, --path, --reset)
    if cli::handle_cli(&cli) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env()?;
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }

    // Logs go to a buffer while the alternate screen is up
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config.logging, &log_buffer);

    tracing::info!(
        "Starting rowscope {} with {} rows ({})",
        rowscope::config::VERSION,
        config.rows,
        if cli.classic { "classic" } else { "virtual" }
    );

    let source = GeneratedSource::new(config.rows);
    let panel: Box<dyn ListPanel> = if cli.classic {
        let focus = cli.focus.and_then(|id| usize::try_from(id).ok());
        Box::new(MenuPanel::new(&source, focus))
    } else {
        Box::new(RowsPanel::new(source, &config.viewport, cli.focus))
    };

    let chosen = tui::run_tui(panel, log_buffer, &config).await?;

    if let Some(row) = chosen {
        println!("Selected: {}", row);
    }

    Ok(())
}

/// Initialize tracing with the TUI buffer layer and optional file output
///
/// Precedence: RUST_LOG env var > config file > default "info".
/// The returned guard must be kept alive for the run so file logs flush.
fn init_tracing(logging: &LoggingConfig, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    // A broken log directory is not worth refusing to start over
    let appender = logging.file_appender().unwrap_or_else(|e| {
        eprintln!("Warning: file logging disabled: {:#}", e);
        None
    });

    // Non-blocking writer; JSON for structured log parsing
    let (file_layer, guard) = match appender {
        Some(appender) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(log_buffer.clone()))
        .with(file_layer)
        .init();

    guard
}
