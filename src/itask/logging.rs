//! Tracing subscriber setup for clients of the library.

use crate::config::ItaskConfig;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global fmt subscriber writing to stderr.
///
/// `RUST_LOG` wins over the configured level; `verbose` wins over both.
/// Calling this twice is harmless: the second install is ignored.
pub fn init(config: &ItaskConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let _ = match config.log_format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };
}
