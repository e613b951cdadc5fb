//! Logging setup for the CLI

use plagscan_core::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Parse log level from config string
fn parse_log_level(level: &str) -> tracing::Level {
  match level.to_lowercase().as_str() {
    "off" | "error" => tracing::Level::ERROR,
    "warn" => tracing::Level::WARN,
    "info" => tracing::Level::INFO,
    "debug" => tracing::Level::DEBUG,
    "trace" => tracing::Level::TRACE,
    _ => tracing::Level::INFO,
  }
}

/// Initialize console logging with config-driven level.
///
/// `RUST_LOG` overrides the configured level. Output goes to stderr so that
/// `--json` results on stdout stay machine readable.
pub fn init_logging(config: &LoggingConfig, verbose: bool) {
  let level = if verbose {
    tracing::Level::DEBUG
  } else {
    parse_log_level(&config.level)
  };

  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();
}
