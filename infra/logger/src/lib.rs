//! # Logger
//!
//! Installs the global `tracing` subscriber for the workspace: a compact
//! console layer, an optional rolling file layer (plain or JSON) written
//! through a non-blocking worker, and an [`EnvFilter`] seeded from the
//! builder and overridable through `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use lazy_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("my-app")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerSettings {
    name: String,
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

/// Configures and installs the global tracing subscriber.
#[derive(Debug, Default)]
#[must_use = "The builder does nothing until `init()` is called."]
pub struct LoggerBuilder {
    settings: LoggerSettings,
}

impl LoggerBuilder {
    /// Identifier used as the log file prefix (`<name>.<date>.log`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.settings.name = name.into();
        self
    }

    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Programmatic filter directives (e.g. `lazy_desktop=debug,dioxus=warn`).
    ///
    /// `RUST_LOG` is ignored once a filter is set here; an invalid filter fails [`LoggerBuilder::init`].
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Enables the rolling file layer under `path`. The directory is created on init.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.path = Some(path.into());
        self
    }

    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Writes the file layer as JSON lines. Has no effect on the console.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }

    /// Consumes the builder and installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown; dropping it stops the
    /// file worker and flushes what is buffered.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   a bad filter, or when no layer is enabled.
    /// * [`LoggerError::Appender`] / [`LoggerError::Internal`] if the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let settings = self.settings;
        validate(&settings)?;

        let env_filter = build_env_filter(&settings)?;

        let mut layers = Vec::new();

        if settings.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = if let Some(path) = &settings.path {
            fs::create_dir_all(path).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create path: {}", path.display()).into()),
            })?;

            let appender = RollingFileAppender::builder()
                .rotation(settings.rotation.clone())
                .filename_prefix(&settings.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(settings.max_files)
                .build(path)?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = layer().with_writer(writer).with_ansi(false);

            layers.push(if settings.json { file_layer.json().boxed() } else { file_layer.boxed() });
            Some(guard)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        tracing::debug!(name = %settings.name, file = settings.path.is_some(), "Logger initialized");

        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// The file worker guard, present only when file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate(settings: &LoggerSettings) -> Result<(), LoggerError> {
    if settings.name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(settings: &LoggerSettings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    settings.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
