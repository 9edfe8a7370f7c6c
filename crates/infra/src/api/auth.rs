//! Access token sources for portal calls

use async_trait::async_trait;
use czds_domain::{CzdsError, Result};

/// Trait for providing access tokens
///
/// Called once per portal call, so implementations that refresh tokens can
/// do it here.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token
    ///
    /// # Errors
    /// Fails when no usable token is available.
    async fn access_token(&self) -> Result<String>;
}

/// Provider handing out a token obtained elsewhere.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl std::fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenProvider").field("token", &"<redacted>").finish()
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String> {
        if self.token.trim().is_empty() {
            return Err(CzdsError::Config("Access token is empty".into()));
        }
        Ok(self.token.clone())
    }
}
