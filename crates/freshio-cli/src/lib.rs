//! CLI for bootstrapping the Freshio training datasets from Kaggle.
//!
//! The binary downloads each configured dataset into `dataset_<n>`
//! folders, waiting out connectivity loss between attempts, and prints
//! a summary of the destination paths.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used only by the binary entry point
use dotenvy as _;
use tracing_subscriber as _;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;

pub mod acquire;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod progress;

// Re-export primary types for convenient access
pub use error::CliError;
pub use parser::Cli;
