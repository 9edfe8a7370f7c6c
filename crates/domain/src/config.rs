//! Client configuration structures

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::errors::{CzdsError, Result};

/// Top-level client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CzdsConfig {
    #[serde(default)]
    pub api: ApiConfig,
    pub auth: AuthConfig,
}

/// Where and how to reach the portal API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: None,
        }
    }
}

/// Credentials used to sign portal calls.
///
/// Acquiring and refreshing the token is done outside this client.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub access_token: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig").field("access_token", &"<redacted>").finish()
    }
}

impl ApiConfig {
    /// Check the connection settings.
    ///
    /// # Errors
    /// Returns [`CzdsError::Config`] for an unparsable or non-HTTP base URL,
    /// or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| CzdsError::Config(format!("Invalid base URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CzdsError::Config(format!(
                "Unsupported base URL scheme: {}",
                url.scheme()
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(CzdsError::Config("Timeout must be greater than zero".into()));
        }
        Ok(())
    }

    /// Base URL without a trailing slash, ready to have paths appended.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl CzdsConfig {
    /// Check that the configuration can be used to build a transport.
    ///
    /// # Errors
    /// Returns [`CzdsError::Config`] when [`ApiConfig::validate`] fails or
    /// the access token is empty.
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        if self.auth.access_token.trim().is_empty() {
            return Err(CzdsError::Config("Access token is empty".into()));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
