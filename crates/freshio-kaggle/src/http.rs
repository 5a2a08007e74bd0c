//! HTTP backend abstraction for the Kaggle API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with automatic retry logic for transient errors.

use crate::credentials::KaggleCredentials;
use crate::error::{KaggleError, KaggleResult};
use crate::models::KaggleConfig;
use async_trait::async_trait;
use futures_util::StreamExt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Per-chunk progress callback: `(downloaded_bytes, total_bytes)`.
///
/// `total_bytes` is 0 when the server does not announce a content length.
pub type ProgressFn<'a> = &'a (dyn Fn(u64, u64) + Send + Sync);

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can stream a response body to disk.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Stream the body at `url` into `dest`, returning the bytes written.
    async fn download_file(
        &self,
        url: &Url,
        dest: &Path,
        progress: Option<ProgressFn<'_>>,
    ) -> KaggleResult<u64>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Implements exponential backoff for transient server errors (5xx)
/// and network errors. Requests carry HTTP Basic auth when credentials
/// are configured; reqwest drops the header on cross-host redirects,
/// which the Kaggle download endpoint relies on (it redirects to signed
/// storage URLs).
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
    credentials: Option<KaggleCredentials>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &KaggleConfig) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
            credentials: config.credentials.clone(),
        }
    }

    /// Build a request with optional authentication.
    fn build_request(&self, url: &Url) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url.as_str());
        if let Some(ref credentials) = self.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.key));
        }
        request
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> KaggleResult<reqwest::Response> {
        let mut last_error: Option<KaggleError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(
                    self.retry_base_delay_ms * 2u64.pow(u32::from(attempt) - 1),
                );
                warn!(
                    "retrying {url} after transient error (attempt {attempt}/{})",
                    self.max_retries
                );
                tokio::time::sleep(delay).await;
            }

            match self.build_request(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(KaggleError::ApiRequestFailed {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                        continue;
                    }

                    // 404 is a special case
                    if status.as_u16() == 404 {
                        if let Some(dataset_id) = extract_dataset_id_from_path(url.path()) {
                            return Err(KaggleError::DatasetNotFound { dataset_id });
                        }
                    }

                    // Rejected credentials fail immediately
                    if status.as_u16() == 401 || status.as_u16() == 403 {
                        return Err(KaggleError::AuthRejected {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                    }

                    // Other 4xx errors or final attempt - fail immediately
                    return Err(KaggleError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < self.max_retries {
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| KaggleError::ApiRequestFailed {
            status: 0,
            url: url.to_string(),
        }))
    }
}

/// Try to extract a dataset ID from a download API path.
fn extract_dataset_id_from_path(path: &str) -> Option<String> {
    let rest = path.split("datasets/download/").nth(1)?;
    let parts: Vec<&str> = rest.splitn(3, '/').collect();
    if parts.len() >= 2 && !parts[0].is_empty() && !parts[1].is_empty() {
        Some(format!("{}/{}", parts[0], parts[1]))
    } else {
        None
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn download_file(
        &self,
        url: &Url,
        dest: &Path,
        progress: Option<ProgressFn<'_>>,
    ) -> KaggleResult<u64> {
        let response = self.fetch_with_retry(url).await?;
        let total_size = response.content_length().unwrap_or(0);

        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = File::create(dest)?;
        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)?;
            downloaded += chunk.len() as u64;

            if let Some(callback) = progress {
                callback(downloaded, total_size);
            }
        }

        file.flush()?;
        debug!("downloaded {downloaded} bytes from {url} to {}", dest.display());

        Ok(downloaded)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// A fake HTTP backend that serves canned archive bytes and records
    /// every URL it was asked for.
    pub struct FakeBackend {
        archives: Mutex<HashMap<String, Vec<u8>>>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        /// Create a new fake backend.
        pub fn new() -> Self {
            Self {
                archives: Mutex::new(HashMap::new()),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Serve `bytes` for any URL containing `url_contains`.
        pub fn with_archive(self, url_contains: &str, bytes: Vec<u8>) -> Self {
            self.archives
                .lock()
                .unwrap()
                .insert(url_contains.to_string(), bytes);
            self
        }

        /// URLs requested so far, in order.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn find_archive(&self, url: &str) -> Option<Vec<u8>> {
            let archives = self.archives.lock().unwrap();
            for (pattern, bytes) in archives.iter() {
                if url.contains(pattern) {
                    return Some(bytes.clone());
                }
            }
            None
        }
    }

    impl Default for FakeBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn download_file(
            &self,
            url: &Url,
            dest: &Path,
            progress: Option<ProgressFn<'_>>,
        ) -> KaggleResult<u64> {
            self.requests.lock().unwrap().push(url.to_string());

            let bytes = self
                .find_archive(url.as_str())
                .ok_or_else(|| KaggleError::ApiRequestFailed {
                    status: 404,
                    url: url.to_string(),
                })?;

            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(dest, &bytes)?;

            let total = bytes.len() as u64;
            if let Some(callback) = progress {
                callback(total, total);
            }

            Ok(total)
        }
    }
}
