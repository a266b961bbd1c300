//! Logging setup for the jurl binary
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! `RUST_LOG` takes precedence over the verbosity flags.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level filter, used when RUST_LOG is unset
    pub default_filter: String,

    /// Whether to include file/line information in logs
    pub include_location: bool,
}

impl LoggingConfig {
    /// Map the number of `-v` flags to a filter
    pub fn from_verbosity(verbose: u8) -> Self {
        let default_filter = match verbose {
            0 => "warn",
            1 => "info,jurl_core=debug,jurl_connection=debug,jurl=debug",
            _ => "trace",
        };

        Self {
            default_filter: default_filter.to_string(),
            include_location: verbose > 1,
        }
    }
}

/// Install the global subscriber
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()?;

    tracing::debug!(filter = %config.default_filter, "logging initialized");
    Ok(())
}
