use crate::error::{ConfigError, ConfigErrorExt};
use crate::model::AppConfig;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File stem probed when no explicit path is given (`lazy.toml`, `lazy.json`, ...).
pub const DEFAULT_CONFIG_PATH: &str = "lazy";

/// Prefix for environment overrides; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "LAZY";

/// Builds `T` from an optional file plus `LAZY__*` environment overrides.
///
/// With `path = None` the default `lazy` file is optional and its absence falls back
/// to struct defaults. An explicit path must exist.
///
/// # Errors
/// * [`ConfigError::NotFound`] when an explicit file path does not exist.
/// * [`ConfigError::Config`] when a source cannot be parsed or does not match `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, None)
}

/// Same layering as [`load_config`], but overrides come from `env` instead of
/// the process environment. Keys keep their `LAZY__` form.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T, I>(path: Option<impl AsRef<Path>>, env: I) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (String, String)>,
{
    load_layered(path, Some(env.into_iter().collect()))
}

fn load_layered<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<config::Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    if required && !effective_path.exists() {
        return Err(ConfigError::NotFound {
            path: effective_path.display().to_string(),
            context: None,
        });
    }

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake)
                .source(env),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    debug!("Config loaded");

    Ok(config)
}

impl AppConfig {
    /// Loads the host configuration, see [`load_config`].
    ///
    /// # Errors
    /// Propagates any [`ConfigError`] from [`load_config`].
    pub fn load(path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        load_config(path)
    }
}
