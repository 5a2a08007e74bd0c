#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultKaggleClient is meant to be
// used as-is, not through its internal generic structure
#![allow(private_interfaces)]

mod archive;
mod client;
mod config;
mod credentials;
mod error;
mod http;
mod models;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultKaggleClient, DownloadOptions, DownloadedDataset};

// Configuration
pub use config::KaggleClientConfig;
pub use credentials::KaggleCredentials;

// Domain types
pub use models::DatasetRef;

// Errors
pub use error::{KaggleError, KaggleResult};

// Progress reporting
pub use http::ProgressFn;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
