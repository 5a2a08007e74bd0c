//! URL construction helpers for the Kaggle API.
//!
//! Pure functions for building Kaggle API URLs, ensuring consistent
//! construction across all API calls.

use crate::models::{DatasetRef, KaggleConfig};
use url::Url;

/// Build the URL for downloading a dataset archive.
///
/// The endpoint responds with a redirect to signed storage, which the
/// HTTP backend follows.
pub fn build_download_url(config: &KaggleConfig, dataset: &DatasetRef) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!(
        "{base_path}/datasets/download/{}/{}",
        dataset.owner, dataset.slug
    ));

    url
}
