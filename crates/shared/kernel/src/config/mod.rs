use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "parklogic";
/// Prefix of environment overrides (e.g. `PARK__LOGGING__LEVEL`).
pub const ENV_PREFIX: &str = "PARK";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config {
        #[source]
        source: config::ConfigError,
        context: Option<Cow<'static, str>>,
    },
}

/// Adds context to a failed configuration step.
pub trait ConfigErrorExt<T> {
    /// # Errors
    /// Returns the original error annotated with `context`.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
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

/// Loads configuration from a file layered with environment overrides.
///
/// 1. **Base File**: `path`, or `parklogic` in the working directory. Any format
///    the `config` crate understands is accepted; without an extension the known
///    extensions are tried in turn. The file is required.
/// 2. **Environment Overrides**: variables prefixed with `PARK__`, nested with
///    double underscores (`PARK__REPLAY__FRAMES=30` maps to `replay.frames`).
///
/// # Errors
/// Returns [`ConfigError`] if the file cannot be found or parsed, or if the
/// merged values do not match `T`.
///
/// # Example
/// ```rust
/// use park_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     frames: u32,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = effective_path(path);
    info!("Loading config from {}", path.display());

    layered(&path, true)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

/// Like [`load_config`], but a missing file is not an error: environment
/// overrides are applied on top of `T`'s serde defaults instead.
///
/// # Errors
/// Returns [`ConfigError`] if a present file cannot be parsed or the merged
/// values do not match `T`.
pub fn load_config_or_default<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = effective_path(path);
    debug!("Loading optional config from {}", path.display());

    layered(&path, false)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

fn effective_path(path: Option<impl AsRef<Path>>) -> PathBuf {
    path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME), |p| p.as_ref().to_path_buf())
}

fn layered(path: &Path, required: bool) -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from(path).required(required)).add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .convert_case(config::Case::Snake),
    )
}
