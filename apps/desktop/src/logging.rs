use lazy_logger::{LevelFilter, Logger, LoggerError};
use lazy_settings::LoggingConfig;
use std::str::FromStr;

/// Installs the global subscriber from the `logging` config section.
///
/// # Errors
/// [`LoggerError::InvalidConfiguration`] for an unknown level name, otherwise
/// whatever [`lazy_logger::LoggerBuilder::init`] reports.
pub fn init_logging(name: &str, config: &LoggingConfig) -> Result<Logger, LoggerError> {
    let level = LevelFilter::from_str(&config.level).map_err(|e| {
        LoggerError::InvalidConfiguration {
            message: format!("Invalid log level '{}': {e}", config.level).into(),
            context: None,
        }
    })?;

    let mut builder = Logger::builder().name(name).level(level);

    if let Some(filter) = &config.filter {
        builder = builder.env_filter(filter.clone());
    }
    if let Some(directory) = &config.directory {
        builder = builder.path(directory.clone()).json(config.json);
    }

    builder.init()
}
