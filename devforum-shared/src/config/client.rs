use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, time::Duration};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Default storage key holding the bearer token.
pub const DEFAULT_TOKEN_KEY: &str = "dev_forum_token";

/// Default storage key holding the theme preference.
pub const DEFAULT_THEME_KEY: &str = "theme";

/// Default upper bound for file uploads (20 MiB).
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 20 * 1024 * 1024;

/// Errors raised while loading or validating a [`ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported configuration format for {0}; use .yaml, .yml or .json")]
    UnsupportedFormat(PathBuf),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Configuration for the DevForum API client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the backend REST API.
    pub api_url: String,

    /// WebSocket endpoint for real-time features.
    pub ws_url: String,

    /// Storage key for the session token.
    pub token_key: String,

    /// Storage key for the theme preference.
    pub theme_key: String,

    /// Default request timeout in seconds. `None` or `0` disables it.
    pub request_timeout_secs: Option<u64>,

    /// Largest file the client will attempt to upload, in bytes.
    pub max_upload_size: u64,

    /// Logging level used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ClientConfig {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            api_url: "http://localhost:8000/api".to_string(),
            ws_url: "ws://localhost:8000/ws".to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            request_timeout_secs: Some(30),
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
            log_level: "info".to_string(),
        }
    }

    /// Loads the configuration from a file, environment variables, or defaults.
    ///
    /// File values win over the environment; environment variables only fill in
    /// values that are still at their defaults.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, or the
    /// resolved configuration fails [`ClientConfig::validate`].
    pub fn load_config(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let defaults = Self::with_defaults();
        let mut config = defaults.clone();

        if let Some(path) = config_path {
            let content = fs::read_to_string(&path)?;
            config = match path.extension().and_then(|ext| ext.to_str()) {
                Some("yaml" | "yml") => serde_yml::from_str(&content)?,
                Some("json") => serde_json::from_str(&content)?,
                _ => return Err(ConfigError::UnsupportedFormat(path)),
            };
            debug!(path = %path.display(), "loaded client configuration file");
        }

        if config.api_url == defaults.api_url
            && let Ok(api_url) = env::var("DEVFORUM_API_URL")
        {
            config.api_url = api_url;
        }
        if config.ws_url == defaults.ws_url
            && let Ok(ws_url) = env::var("DEVFORUM_WS_URL")
        {
            config.ws_url = ws_url;
        }
        if config.request_timeout_secs == defaults.request_timeout_secs
            && let Ok(timeout) = env::var("DEVFORUM_REQUEST_TIMEOUT_SECS")
        {
            let secs = timeout
                .parse::<u64>()
                .map_err(|err| ConfigError::InvalidValue {
                    field: "DEVFORUM_REQUEST_TIMEOUT_SECS",
                    reason: err.to_string(),
                })?;
            config.request_timeout_secs = Some(secs);
        }
        if config.log_level == defaults.log_level
            && let Ok(log_level) = env::var("DEVFORUM_LOG_LEVEL")
        {
            config.log_level = log_level;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the URLs parse with a supported scheme and the storage keys are usable.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("api_url", &self.api_url, &["http", "https"])?;
        check_url("ws_url", &self.ws_url, &["ws", "wss"])?;

        if self.token_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "token_key",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "theme_key",
                reason: "must not be empty".to_string(),
            });
        }
        if self.token_key == self.theme_key {
            return Err(ConfigError::InvalidValue {
                field: "theme_key",
                reason: "must differ from token_key".to_string(),
            });
        }
        Ok(())
    }

    /// Resolved request timeout, if any.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

fn check_url(field: &'static str, value: &str, schemes: &[&str]) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|err| ConfigError::InvalidValue {
        field,
        reason: err.to_string(),
    })?;
    if schemes.contains(&url.scheme()) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("unsupported scheme `{}`", url.scheme()),
        })
    }
}
