use config::{Config, Environment, File};
use fprog_domain::constants::{DEFAULT_CONFIG_STEM, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Custom error type for config loading.
#[fprog_derive::fprog_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Environment snapshot used instead of the process environment (tests, embedding).
pub type EnvMap = config::Map<String, String>;

/// Loads configuration from a file layered with environment overrides.
///
/// 1. **File**: when `path` is given it must exist; its format follows the
///    extension (TOML, JSON, YAML, ...). Without a path, a `factorio-progress.*`
///    file in the working directory is used if present.
/// 2. **Environment**: variables prefixed with `FPROG__` override file values.
///    Nested keys use double underscores (`FPROG__LOG__LEVEL` maps to `log.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, cannot be
/// parsed, or the merged values do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use fprog_kernel::config::load_config;
/// use fprog_kernel::domain::config::AppConfig;
///
/// let cfg: AppConfig = load_config(Some("bars.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`] but reads overrides from `env` instead of the process
/// environment when provided.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<EnvMap>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let builder = match path {
        Some(path) => {
            let path = path.as_ref();
            info!("Loading config from {}", path.display());
            Config::builder().add_source(File::from(path).required(true))
        },
        None => {
            debug!("Looking for optional {DEFAULT_CONFIG_STEM}.* config");
            Config::builder().add_source(File::with_name(DEFAULT_CONFIG_STEM).required(false))
        },
    };

    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .source(env),
    );

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
