//! Client configuration.
//!
//! Values come either from code (`ClientConfig::new`) or from the process
//! environment (`ClientConfig::from_env`):
//!
//! | Variable                   | Meaning                         | Default |
//! |----------------------------|---------------------------------|---------|
//! | `PROJECT_API_URL`          | API root, e.g. `http://host/api/v1` | required |
//! | `PROJECT_API_TIMEOUT_SECS` | transport timeout in seconds    | 30      |

use std::time::Duration;

use crate::error::ApiError;

pub const URL_ENV: &str = "PROJECT_API_URL";
pub const TIMEOUT_ENV: &str = "PROJECT_API_TIMEOUT_SECS";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, `from_env` minus the
    /// process-global state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::InvalidConfig(format!("{URL_ENV} is not set")))?;

        let mut config = Self::new(&base_url);
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ApiError::InvalidConfig(format!("{TIMEOUT_ENV} must be a whole number of seconds, got {raw:?}"))
            })?;
            if secs == 0 {
                return Err(ApiError::InvalidConfig(format!("{TIMEOUT_ENV} must be greater than zero")));
            }
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}
