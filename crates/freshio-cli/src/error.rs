//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI and mappings from
//! `KaggleError` to exit codes and user-facing messages.

use freshio_kaggle::KaggleError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (credentials, URLs).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Kaggle API error that surfaced outside the acquisition loop.
    #[error("{0}")]
    Kaggle(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Kaggle(_) => 1,
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<KaggleError> for CliError {
    fn from(err: KaggleError) -> Self {
        match err {
            KaggleError::CredentialsMissing { .. }
            | KaggleError::CredentialsInvalid { .. }
            | KaggleError::InvalidUrl(_) => CliError::Config(err.to_string()),
            KaggleError::InvalidDatasetRef { .. } => CliError::Arguments(err.to_string()),
            KaggleError::Io(e) => CliError::Io(e.to_string()),
            _ => CliError::Kaggle(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Kaggle("x".to_string()).exit_code(), 1);
        assert_eq!(CliError::Arguments("x".to_string()).exit_code(), 2);
        assert_eq!(CliError::Io("x".to_string()).exit_code(), 74);
        assert_eq!(CliError::Config("x".to_string()).exit_code(), 78);
    }

    #[test]
    fn test_missing_credentials_map_to_config() {
        let err = CliError::from(KaggleError::CredentialsMissing {
            searched: PathBuf::from("/home/user/.kaggle/kaggle.json"),
        });
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_api_errors_map_to_general() {
        let err = CliError::from(KaggleError::ApiRequestFailed {
            status: 500,
            url: "https://www.kaggle.com".to_string(),
        });
        assert!(matches!(err, CliError::Kaggle(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
