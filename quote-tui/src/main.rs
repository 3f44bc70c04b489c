//! Terminal travel-quote form.
//!
//! Shows a searchable multi-select destination picker. On submit the chosen
//! destinations are printed to stdout, one per line (or as a JSON array with
//! `--json`), so the form can be used from scripts.

use std::path::PathBuf;

use clap::Parser;
use quote_tui::config::{self, OptionOverrides};
use quote_tui::ui::theme::Theme;
use quote_tui::App;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Command-line arguments for the quote form.
#[derive(Parser, Debug)]
#[command(
    name = "quote-tui",
    version,
    about = "Pick travel destinations for a quote request"
)]
struct Cli {
    /// Catalog JSON file. Defaults to `QUOTE_TUI_CATALOG_PATH` or the
    /// platform config dir; the built-in list is used if it does not exist.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Close the list after each selection.
    #[arg(long)]
    close_on_select: bool,

    /// Keep the search text after a selection instead of clearing it.
    #[arg(long)]
    keep_filter: bool,

    /// Delay before announcements reach the live region.
    #[arg(long, value_name = "MS")]
    announce_delay_ms: Option<u64>,

    /// Directory for the daily log file.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Print the submitted destinations as a JSON array.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The terminal is in raw mode while the form runs, so logs go to a file.
    let log_dir = cli.log_dir.clone().unwrap_or_else(config::get_log_dir);
    std::fs::create_dir_all(&log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&log_dir, "quote-tui");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("quote-tui starting up");

    let catalog_path = cli.catalog.clone().unwrap_or_else(config::get_catalog_path);
    let catalog = config::load_catalog(&catalog_path)?;
    let options = config::resolve_options(&OptionOverrides {
        close_on_select: cli.close_on_select,
        keep_filter: cli.keep_filter,
        announce_delay_ms: cli.announce_delay_ms,
    });
    tracing::info!(
        catalog = %catalog_path.display(),
        destinations = catalog.destinations.len(),
        ?options,
        "Configuration resolved"
    );

    let mut app = App::new(&catalog, options, Theme::detect());
    let submitted = quote_tui::ui::run_app(&mut app).await?;

    match submitted {
        Some(labels) if cli.json => println!("{}", serde_json::to_string(&labels)?),
        Some(labels) => {
            for label in labels {
                println!("{}", label);
            }
        }
        None => tracing::info!("No quote requested"),
    }

    tracing::info!("quote-tui shutting down");
    Ok(())
}
