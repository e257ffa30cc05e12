use crate::utils::config::get_env_or_default;
use tracing::Level;

/// Initializes the global tracing subscriber
///
/// The level is read from the `ETNA_LOGLEVEL` environment variable
/// (`trace`, `debug`, `info`, `warn`, `error`; defaults to `info`).
/// Safe to call more than once; subsequent calls are no-ops.
pub fn setup_logger() {
    let level = get_env_or_default("ETNA_LOGLEVEL", String::from("info"));
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}
