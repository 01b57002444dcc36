//! # Settings
//!
//! Configuration for the host application: window geometry, how long the heavy
//! component is deferred, and logging knobs.
//!
//! Values are layered: struct defaults, then an optional file, then
//! `LAZY__`-prefixed environment variables (`LAZY__LOADER__DELAY_MS=250`).
//!
//! ```rust
//! use lazy_settings::AppConfig;
//!
//! let cfg = AppConfig::default();
//! assert_eq!(cfg.loader.fallback_text, "Loading...");
//! ```

mod error;
mod loader;
mod model;

pub use crate::error::{ConfigError, ConfigErrorExt};
pub use crate::loader::{DEFAULT_CONFIG_PATH, ENV_PREFIX, load_config, load_config_with_env};
pub use crate::model::{AppConfig, AppConfigInner, LoaderConfig, LoggingConfig, WindowConfig};
