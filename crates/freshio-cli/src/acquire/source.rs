//! The downstream call the acquisition loop makes per attempt.

use anyhow::{Context, Result};
use async_trait::async_trait;
use freshio_kaggle::{DatasetRef, DefaultKaggleClient, DownloadOptions, ProgressFn};
use std::path::Path;

/// Where dataset archives come from.
///
/// Failures are deliberately untyped: the acquisition loop treats every
/// failure identically (log, wait for connectivity, retry).
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch `dataset_id` into `dest`.
    async fn fetch(
        &self,
        dataset_id: &str,
        dest: &Path,
        progress: Option<ProgressFn<'_>>,
    ) -> Result<()>;
}

/// `DatasetSource` backed by the Kaggle client.
pub struct KaggleSource {
    client: DefaultKaggleClient,
    options: DownloadOptions,
}

impl KaggleSource {
    /// Wrap an authenticated client.
    pub fn new(client: DefaultKaggleClient, options: DownloadOptions) -> Self {
        Self { client, options }
    }
}

#[async_trait]
impl DatasetSource for KaggleSource {
    async fn fetch(
        &self,
        dataset_id: &str,
        dest: &Path,
        progress: Option<ProgressFn<'_>>,
    ) -> Result<()> {
        let dataset: DatasetRef = dataset_id.parse()?;

        self.client
            .dataset_download_files(&dataset, dest, &self.options, progress)
            .await
            .with_context(|| format!("downloading {dataset_id}"))?;

        Ok(())
    }
}
