use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level host configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub window: WindowConfig,
    pub loader: LoaderConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config, cheap to clone into component context.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

impl From<AppConfigInner> for AppConfig {
    fn from(inner: AppConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

/// Desktop window geometry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// How the host defers the heavy component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Milliseconds the suspense boundary waits before mounting the component.
    pub delay_ms: u64,
    pub fallback_text: String,
}

/// Logging knobs consumed by the logger bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Extra env-filter directives, e.g. `lazy_desktop=debug`.
    pub filter: Option<String>,
    /// Rolling log files go here when set.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Lazy Heavy Component".to_owned(), width: 1024.0, height: 768.0 }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { delay_ms: 800, fallback_text: "Loading...".to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, directory: None, json: false }
    }
}
