//! Runtime configuration for the quote form.
//!
//! Every tunable has a compile-time default and can be overridden through a
//! dedicated environment variable. Command-line flags take precedence over
//! both (see `main.rs`).

use std::path::{Path, PathBuf};

use anyhow::Context;
use select_dropdown::{Catalog, DropdownOptions, DEFAULT_ANNOUNCE_DELAY_MS};

/// Directory name used under the platform config dir.
const APP_DIR_NAME: &str = "quote-tui";

/// File name of the destination catalog.
const CATALOG_FILE_NAME: &str = "catalog.json";

/// Default directory for the rolling log file, relative to the working dir.
const DEFAULT_LOG_DIR: &str = "logs";

/// Get the catalog path.
///
/// Priority:
/// 1. `QUOTE_TUI_CATALOG_PATH` env variable if set
/// 2. `<config dir>/quote-tui/catalog.json`
/// 3. `./catalog.json` when the platform has no config dir
pub fn get_catalog_path() -> PathBuf {
    if let Ok(path) = std::env::var("QUOTE_TUI_CATALOG_PATH") {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CATALOG_FILE_NAME)
}

/// Get the log directory.
///
/// Priority:
/// 1. `QUOTE_TUI_LOG_DIR` env variable if set
/// 2. `logs` as fallback
pub fn get_log_dir() -> PathBuf {
    if let Ok(path) = std::env::var("QUOTE_TUI_LOG_DIR") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_LOG_DIR)
}

/// Get the announcement delay in milliseconds.
///
/// Priority:
/// 1. `QUOTE_TUI_ANNOUNCE_DELAY_MS` env variable if set (falls back to the
///    default if the value cannot be parsed as a `u64`)
/// 2. `100` milliseconds as fallback
pub fn get_announce_delay_ms() -> u64 {
    if let Ok(delay) = std::env::var("QUOTE_TUI_ANNOUNCE_DELAY_MS") {
        return delay.parse().unwrap_or(DEFAULT_ANNOUNCE_DELAY_MS);
    }

    DEFAULT_ANNOUNCE_DELAY_MS
}

/// Load the catalog at `path`.
///
/// A missing file is not an error: the built-in travel-quote catalog is used.
/// A file that exists but cannot be read or validated is reported.
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "No catalog file, using built-in destinations");
        return Ok(Catalog::default());
    }

    Catalog::load(path).with_context(|| format!("Failed to load catalog from {}", path.display()))
}

/// Behavior switches collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub close_on_select: bool,
    pub keep_filter: bool,
    pub announce_delay_ms: Option<u64>,
}

/// Build dropdown options from defaults, environment and flags.
pub fn resolve_options(overrides: &OptionOverrides) -> DropdownOptions {
    DropdownOptions {
        close_on_select: overrides.close_on_select,
        clear_filter_on_select: !overrides.keep_filter,
        announce_delay_ms: overrides
            .announce_delay_ms
            .unwrap_or_else(get_announce_delay_ms),
        ..DropdownOptions::default()
    }
}
