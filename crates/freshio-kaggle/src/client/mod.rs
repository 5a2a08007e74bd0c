//! Kaggle client: authentication and dataset downloads.

mod download;

pub use download::{DownloadOptions, DownloadedDataset};

use crate::config::KaggleClientConfig;
use crate::credentials::KaggleCredentials;
use crate::error::KaggleResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::KaggleConfig;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Kaggle client using the reqwest HTTP backend.
pub type DefaultKaggleClient = KaggleClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Kaggle API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultKaggleClient` for production code; the generic parameter `B`
/// is an implementation detail.
pub struct KaggleClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: KaggleConfig,
}

impl DefaultKaggleClient {
    /// Resolve credentials and build a ready-to-use client.
    ///
    /// Credentials come from the config override when present, otherwise
    /// from `KAGGLE_USERNAME`/`KAGGLE_KEY` or `kaggle.json`. No network
    /// call is made here; the API checks the credentials on the first
    /// download request that carries them.
    pub fn authenticate(config: &KaggleClientConfig) -> KaggleResult<Self> {
        let mut internal = to_internal_config(config)?;
        if internal.credentials.is_none() {
            internal.credentials = Some(KaggleCredentials::resolve()?);
        }

        let backend = ReqwestBackend::new(&internal);
        Ok(Self {
            backend,
            config: internal,
        })
    }
}

fn to_internal_config(config: &KaggleClientConfig) -> KaggleResult<KaggleConfig> {
    Ok(KaggleConfig {
        base_url: Url::parse(&config.base_url)?,
        credentials: config.credentials.clone(),
        user_agent: config.user_agent.clone(),
        connect_timeout_secs: config.connect_timeout.as_secs(),
        max_retries: config.max_retries,
        #[allow(clippy::cast_possible_truncation)] // Duration milliseconds won't exceed u64 in practice
        retry_base_delay_ms: config.retry_base_delay.as_millis() as u64,
    })
}

impl<B: HttpBackend> KaggleClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: KaggleConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
