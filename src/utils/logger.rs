use crate::utils::config::get_env_or_default;
use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber once
///
/// The level comes from the `LOGLEVEL` environment variable (trace, debug,
/// info, warn, error), defaulting to info. Safe to call repeatedly, e.g.
/// from every test.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_level(&get_env_or_default("LOGLEVEL", String::from("info")));
        // try_init: another subscriber may already be installed by the host
        let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
    });
}

fn parse_level(value: &str) -> Level {
    match value.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
