use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

use crate::config::Settings;
use crate::error::{Error, Result};

/// Initialize the logging system
pub fn init_logging(config: &Settings) -> Result<()> {
    // Parse log level
    let log_level = match config.general.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Create environment filter
    let filter = EnvFilter::from_default_env().add_directive(log_level.into());

    // Set global default, JSON or text format per configuration
    let result = if config.general.structured_logging {
        Registry::default()
            .with(filter)
            .with(fmt::layer().with_target(true).json())
            .try_init()
    } else {
        Registry::default()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| Error::Internal(format!("Failed to set global default subscriber: {}", e)))
}
