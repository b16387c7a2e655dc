use std::str::FromStr;

use log::Level;
use thiserror::Error;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Whether the upload endpoint is called anonymously or with the logged in user's credentials
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// No credentials form, uploads carry no authorization
    Anonymous,
    /// Register/login form shown, uploads require a login and carry basic auth
    #[default]
    Basic,
}

impl AuthMode {
    pub fn requires_login(self) -> bool {
        matches!(self, Self::Basic)
    }
}

impl FromStr for AuthMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "anonymous" => Ok(Self::Anonymous),
            "basic" => Ok(Self::Basic),
            _ => Err(ConfigError::AuthMode(s.to_owned())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown auth mode `{0}`. Expected `basic` or `none`")]
    AuthMode(String),
    #[error("Unknown log level `{0}`")]
    LogLevel(String),
    #[error("API url cannot be empty")]
    EmptyUrl,
}

/// Settings baked into the bundle at build time. See [ClientConfig::from_build_env].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: &'static str,
    pub auth_mode: AuthMode,
    pub log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL,
            auth_mode: AuthMode::default(),
            log_level: Level::Info,
        }
    }
}

impl ClientConfig {
    /// Read `JOB_FINDER_API_URL`, `JOB_FINDER_AUTH` and `JOB_FINDER_LOG_LEVEL` as they were set
    /// when the client was compiled
    /// # Errors
    /// If any variable is set to a value that cannot be parsed
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("JOB_FINDER_API_URL"),
            option_env!("JOB_FINDER_AUTH"),
            option_env!("JOB_FINDER_LOG_LEVEL"),
        )
    }

    /// Build a config from optional raw values, using the defaults for missing entries
    /// # Errors
    /// If any value is present but cannot be parsed
    pub fn from_values(
        api_url: Option<&'static str>,
        auth_mode: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = api_url {
            let url = url.trim().trim_end_matches('/');
            if url.is_empty() {
                return Err(ConfigError::EmptyUrl);
            }
            config.api_url = url;
        }
        if let Some(mode) = auth_mode {
            config.auth_mode = mode.parse()?;
        }
        if let Some(level) = log_level {
            config.log_level = Level::from_str(level.trim())
                .map_err(|_| ConfigError::LogLevel(level.to_owned()))?;
        }
        Ok(config)
    }
}
