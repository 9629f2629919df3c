//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the plugin data directory.
pub const LOG_FILE_NAME: &str = "catalist.log";

const DEFAULT_LEVEL: &str = "info";

/// Initializes the tracing subscriber with JSON output to a rotating file.
///
/// The pipeline is:
///
/// ```text
/// tracing macros → EnvFilter(trace_level) → fmt::layer().json() → FileWriter
/// ```
///
/// Logs land in `~/.local/share/zellij/catalist/catalist.log` (through the
/// `/host` mount of the sandbox).
///
/// Observability is optional: if the data directory cannot be created the
/// function returns without installing anything. Only the first call installs
/// a subscriber; later calls are no-ops.
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = FileWriter::new(data_dir.join(LOG_FILE_NAME));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_current_span(true)
        .with_span_list(false)
        .with_target(true)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(build_filter(config.trace_level.as_deref()))
        .with(fmt_layer)
        .try_init();
}

/// Builds the level filter, falling back to `info` for missing or invalid directives.
pub(crate) fn build_filter(level: Option<&str>) -> EnvFilter {
    let level = level.unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}
