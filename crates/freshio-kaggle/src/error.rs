//! Error types for Kaggle API operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Kaggle operations.
pub type KaggleResult<T> = Result<T, KaggleError>;

/// Errors related to Kaggle API operations.
#[derive(Debug, Error)]
pub enum KaggleError {
    /// API request failed with an HTTP error status.
    #[error("Kaggle API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The requested dataset was not found.
    #[error("Dataset '{dataset_id}' not found on Kaggle")]
    DatasetNotFound {
        /// The dataset ID that was not found
        dataset_id: String,
    },

    /// Kaggle rejected the configured credentials.
    #[error("Kaggle rejected the configured credentials (status {status}): {url}")]
    AuthRejected {
        /// HTTP status code (401 or 403)
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// No credentials could be resolved from the environment or disk.
    #[error(
        "Kaggle credentials not found: set KAGGLE_USERNAME and KAGGLE_KEY, or create {}",
        searched.display()
    )]
    CredentialsMissing {
        /// The kaggle.json location that was checked
        searched: PathBuf,
    },

    /// A credentials file exists but could not be parsed.
    #[error("Invalid credentials file {}: {message}", path.display())]
    CredentialsInvalid {
        /// Path to the offending file
        path: PathBuf,
        /// Description of what was invalid
        message: String,
    },

    /// A dataset reference string did not look like `owner/slug`.
    #[error("Invalid dataset reference '{input}': expected owner/slug")]
    InvalidDatasetRef {
        /// The string that failed to parse
        input: String,
    },

    /// An archive entry would be written outside the destination directory.
    #[error("Archive entry '{name}' escapes the destination directory")]
    UnsafeArchivePath {
        /// The offending entry name
        name: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Filesystem error while writing or extracting a download.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Zip archive error.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}
