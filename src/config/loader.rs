//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. File passed with `--config`
//! 4. `~/.config/randuser/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::constants;
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub throttle: ThrottleConfig,
    pub ids: IdRangeConfig,
}

/// Users resource settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base resource; a user is fetched from `{base_url}/{id}`.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: constants::USERS_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Button throttle settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    pub interval_ms: u64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            interval_ms: constants::DEFAULT_THROTTLE.as_millis() as u64,
        }
    }
}

impl ThrottleConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Inclusive range the random user id is drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdRangeConfig {
    pub min: u32,
    pub max: u32,
}

impl Default for IdRangeConfig {
    fn default() -> Self {
        Self {
            min: constants::MIN_USER_ID,
            max: constants::MAX_USER_ID,
        }
    }
}

/// One config file as written: only the keys it sets are `Some`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    api: ApiLayer,
    throttle: ThrottleLayer,
    ids: IdRangeLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiLayer {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThrottleLayer {
    interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IdRangeLayer {
    min: Option<u32>,
    max: Option<u32>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `explicit` (which must exist when
    /// given), then applies environment variable overrides.
    pub fn load(explicit: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        Self::load_layers(global.as_deref(), explicit, env)
    }

    fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "loading global config");
                let global = Self::load_file(global_path)?;
                config.merge(global);
            }
        }

        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            let local = Self::load_file(path)?;
            config.merge(local);
        }

        config.apply_env_vars(env)?;
        config.validate()?;

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join(constants::CONFIG_FILENAME))
    }

    /// Apply every key `layer` sets, whatever its value.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(url) = layer.api.base_url {
            self.api.base_url = url;
        }
        if let Some(secs) = layer.api.timeout_secs {
            self.api.timeout_secs = Some(secs);
        }
        if let Some(ms) = layer.throttle.interval_ms {
            self.throttle.interval_ms = ms;
        }
        if let Some(min) = layer.ids.min {
            self.ids.min = min;
        }
        if let Some(max) = layer.ids.max {
            self.ids.max = max;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) -> Result<(), ConfigError> {
        if let Ok(val) = env.var(constants::ENV_BASE_URL) {
            if !val.trim().is_empty() {
                self.api.base_url = val.trim().to_string();
            }
        }

        let invalid = |e: crate::env::InvalidVar| ConfigError::InvalidValue {
            key: e.name,
            reason: format!("expected a whole number, got {:?}", e.value),
        };

        if let Some(ms) = env.parsed::<u64>(constants::ENV_THROTTLE_MS).map_err(invalid)? {
            self.throttle.interval_ms = ms;
        }
        if let Some(secs) = env.parsed::<u64>(constants::ENV_TIMEOUT_SECS).map_err(invalid)? {
            self.api.timeout_secs = Some(secs);
        }

        Ok(())
    }

    /// Apply CLI flag overrides (highest priority) and re-validate.
    pub fn apply_overrides(
        &mut self,
        base_url: Option<String>,
        interval_ms: Option<u64>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = base_url {
            self.api.base_url = url;
        }
        if let Some(ms) = interval_ms {
            self.throttle.interval_ms = ms;
        }
        self.validate()
    }

    /// Reject values the widget cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "api.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.ids.min == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ids.min".into(),
                reason: "user ids start at 1".into(),
            });
        }
        if self.ids.min > self.ids.max {
            return Err(ConfigError::InvalidValue {
                key: "ids".into(),
                reason: format!("min ({}) is greater than max ({})", self.ids.min, self.ids.max),
            });
        }
        if self.api.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "api.timeout_secs".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        Ok(())
    }
}
