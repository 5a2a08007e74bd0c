//! Public configuration for the Kaggle client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use crate::credentials::KaggleCredentials;
use std::time::Duration;

/// Configuration for the Kaggle client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use freshio_kaggle::KaggleClientConfig;
/// use std::time::Duration;
///
/// let config = KaggleClientConfig::new()
///     .with_connect_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct KaggleClientConfig {
    /// Base URL for the Kaggle API
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Connect timeout for HTTP requests
    pub(crate) connect_timeout: Duration,
    /// Credentials override; resolved from the environment when absent
    pub(crate) credentials: Option<KaggleCredentials>,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for KaggleClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.kaggle.com/api/v1".to_string(),
            user_agent: concat!("freshio-data/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: Duration::from_secs(30),
            credentials: None,
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl KaggleClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the Kaggle API.
    ///
    /// Defaults to `https://www.kaggle.com/api/v1`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the connect timeout.
    ///
    /// Defaults to 30 seconds. This bounds connection establishment only;
    /// dataset archives can take arbitrarily long to stream.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set explicit credentials, bypassing environment resolution.
    #[must_use]
    pub fn with_credentials(mut self, credentials: KaggleCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 3 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KaggleClientConfig::new();
        assert_eq!(config.base_url, "https://www.kaggle.com/api/v1");
        assert!(config.user_agent.contains("freshio-data"));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert!(config.credentials.is_none());
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_builder_pattern() {
        let config = KaggleClientConfig::new()
            .with_base_url("https://custom.api/")
            .with_user_agent("test-agent")
            .with_connect_timeout(Duration::from_secs(60))
            .with_credentials(KaggleCredentials::new("user", "secret"))
            .with_max_retries(5);

        assert_eq!(config.base_url, "https://custom.api/");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.connect_timeout, Duration::from_secs(60));
        assert_eq!(
            config.credentials,
            Some(KaggleCredentials::new("user", "secret"))
        );
        assert_eq!(config.max_retries, 5);
    }
}
