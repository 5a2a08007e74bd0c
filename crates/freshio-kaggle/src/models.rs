//! Internal types for the Kaggle client.
//!
//! The internal config is derived from the public `KaggleClientConfig`;
//! see `config.rs`.

use crate::credentials::KaggleCredentials;
use crate::error::KaggleError;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Kaggle client.
#[derive(Debug, Clone)]
pub struct KaggleConfig {
    /// Base URL for the Kaggle API (default: <https://www.kaggle.com/api/v1>)
    pub base_url: Url,
    /// Credentials sent as HTTP Basic auth
    pub credentials: Option<KaggleCredentials>,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Maximum number of retry attempts for transient errors (default: 3)
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff (default: 500)
    pub retry_base_delay_ms: u64,
}

impl Default for KaggleConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://www.kaggle.com/api/v1")
                .expect("default Kaggle API URL is valid"),
            credentials: None,
            user_agent: concat!("freshio-data/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout_secs: 30,
            max_retries: 3,
            retry_base_delay_ms: 500,
        }
    }
}

// ============================================================================
// Dataset Reference
// ============================================================================

/// Reference to a Kaggle dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatasetRef {
    /// Dataset owner (user or organization)
    pub owner: String,
    /// Dataset slug
    pub slug: String,
}

impl DatasetRef {
    /// Create a new dataset reference.
    pub fn new(owner: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            slug: slug.into(),
        }
    }

    /// Parse a dataset reference from an `owner/slug` string.
    pub fn parse(dataset_id: &str) -> Option<Self> {
        let parts: Vec<&str> = dataset_id.splitn(2, '/').collect();
        if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            Some(Self {
                owner: parts[0].to_string(),
                slug: parts[1].to_string(),
            })
        } else {
            None
        }
    }

    /// Get the full dataset ID (owner/slug).
    pub fn id(&self) -> String {
        format!("{}/{}", self.owner, self.slug)
    }
}

impl std::fmt::Display for DatasetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.slug)
    }
}

impl std::str::FromStr for DatasetRef {
    type Err = KaggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| KaggleError::InvalidDatasetRef {
            input: s.to_string(),
        })
    }
}
