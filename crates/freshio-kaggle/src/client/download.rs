//! Dataset archive downloads.

use super::KaggleClient;
use crate::archive;
use crate::error::KaggleResult;
use crate::http::{HttpBackend, ProgressFn};
use crate::models::DatasetRef;
use crate::url::build_download_url;
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for a dataset download.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Extract the archive into the destination and delete it afterwards.
    pub unzip: bool,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self { unzip: true }
    }
}

/// Record of a completed dataset download.
#[derive(Debug, Clone)]
pub struct DownloadedDataset {
    /// The dataset that was downloaded
    pub dataset: DatasetRef,
    /// Directory the dataset landed in
    pub dest_dir: PathBuf,
    /// Path of the archive; `None` when it was extracted and removed
    pub archive_path: Option<PathBuf>,
    /// Bytes streamed from the API
    pub bytes_downloaded: u64,
}

impl<B: HttpBackend> KaggleClient<B> {
    /// Download a dataset's files into `dest_dir`.
    ///
    /// The dataset is streamed as a zip archive to `dest_dir/{slug}.zip`.
    /// With `unzip` set (the default) the archive is extracted into
    /// `dest_dir` and removed afterwards; an extraction failure leaves
    /// the archive in place.
    pub async fn dataset_download_files(
        &self,
        dataset: &DatasetRef,
        dest_dir: &Path,
        options: &DownloadOptions,
        progress: Option<ProgressFn<'_>>,
    ) -> KaggleResult<DownloadedDataset> {
        let url = build_download_url(&self.config, dataset);

        std::fs::create_dir_all(dest_dir)?;
        let archive_path = dest_dir.join(format!("{}.zip", dataset.slug));

        info!("downloading dataset {dataset} to {}", dest_dir.display());
        let bytes_downloaded = self
            .backend
            .download_file(&url, &archive_path, progress)
            .await?;

        let archive_path = if options.unzip {
            archive::extract_archive(&archive_path, dest_dir)?;
            std::fs::remove_file(&archive_path)?;
            None
        } else {
            Some(archive_path)
        };

        Ok(DownloadedDataset {
            dataset: dataset.clone(),
            dest_dir: dest_dir.to_path_buf(),
            archive_path,
            bytes_downloaded,
        })
    }
}
