use std::borrow::Cow;

/// Errors raised while assembling the layered configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The `config` crate failed to read a source or deserialize the result.
    #[error("Config error{}: {source}", format_context(context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// A file was requested explicitly but does not exist.
    #[error("Config file not found{}: {path}", format_context(context))]
    NotFound { path: String, context: Option<Cow<'static, str>> },
}

pub trait ConfigErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                ConfigError::Config { context: c, .. } | ConfigError::NotFound { context: c, .. } => {
                    *c = Some(context.into());
                },
            }
            e
        })
    }
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
