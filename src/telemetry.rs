//! Tracing subscriber setup.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

/// Installs the global subscriber.
///
/// `RUST_LOG` directives win over `config.log_level`; `LOG_FORMAT=json`
/// switches to one JSON object per line.
///
/// # Errors
///
/// Returns an error if the log level is not a valid filter directive or a
/// global subscriber is already installed.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;

    if config.log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()?;
    }

    Ok(())
}
