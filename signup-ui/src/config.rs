//! Window and logging settings for the signup UI.
//!
//! Resolution order: explicit `--config` path, then the `SIGNUP_UI_CONFIG`
//! environment variable, then built-in defaults. The browser build always
//! uses the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "SIGNUP_UI_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub dark_mode: bool,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_title: "Crea Una Cuenta!".to_string(),
            window_width: 480.0,
            window_height: 560.0,
            dark_mode: true,
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        log::debug!("Loaded UI config from {}", path.display());
        Ok(config)
    }

    /// Picks the config source; `env_path` is the value of [`CONFIG_ENV_VAR`].
    pub fn resolve_from(
        explicit: Option<&Path>,
        env_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        match explicit.map(Path::to_path_buf).or(env_path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::resolve_from(explicit, env_path)
    }

    /// Level for loggers that take a single filter. Directive strings such
    /// as `signup_form=debug` only apply through `RUST_LOG` and fall back to info.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.trim().parse().unwrap_or(log::LevelFilter::Info)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }
}
