//! Credential resolution for the Kaggle API.
//!
//! Resolution order matches the official Kaggle tooling: environment
//! variables first, then a `kaggle.json` file in `$KAGGLE_CONFIG_DIR`
//! or `~/.kaggle/`.

use crate::error::{KaggleError, KaggleResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable holding the Kaggle account name.
pub const USERNAME_ENV: &str = "KAGGLE_USERNAME";
/// Environment variable holding the Kaggle API key.
pub const KEY_ENV: &str = "KAGGLE_KEY";

const CONFIG_DIR_ENV: &str = "KAGGLE_CONFIG_DIR";
const CONFIG_FILE_NAME: &str = "kaggle.json";

/// Kaggle API credentials, sent as HTTP Basic auth.
#[derive(Clone, PartialEq, Eq)]
pub struct KaggleCredentials {
    /// Kaggle account name
    pub username: String,
    /// Kaggle API key
    pub key: String,
}

// The key never appears in Debug output or logs.
impl std::fmt::Debug for KaggleCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KaggleCredentials")
            .field("username", &self.username)
            .field("key", &"[redacted]")
            .finish()
    }
}

/// On-disk shape of `kaggle.json`.
#[derive(Deserialize)]
struct CredentialsFile {
    username: String,
    key: String,
}

impl KaggleCredentials {
    /// Create credentials from explicit values.
    pub fn new(username: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            key: key.into(),
        }
    }

    /// Resolve credentials from the environment, then from `kaggle.json`.
    pub fn resolve() -> KaggleResult<Self> {
        if let Some(credentials) = Self::from_env() {
            return Ok(credentials);
        }

        let path = config_file_path();
        if path.is_file() {
            return Self::from_file(&path);
        }

        Err(KaggleError::CredentialsMissing { searched: path })
    }

    /// Read credentials from `KAGGLE_USERNAME`/`KAGGLE_KEY`.
    ///
    /// Variables that are set but empty count as missing.
    pub fn from_env() -> Option<Self> {
        let username = std::env::var(USERNAME_ENV).ok().filter(|v| !v.is_empty())?;
        let key = std::env::var(KEY_ENV).ok().filter(|v| !v.is_empty())?;
        Some(Self { username, key })
    }

    /// Read credentials from a `kaggle.json` file.
    pub fn from_file(path: &Path) -> KaggleResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let parsed: CredentialsFile =
            serde_json::from_str(&raw).map_err(|e| KaggleError::CredentialsInvalid {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if parsed.username.is_empty() || parsed.key.is_empty() {
            return Err(KaggleError::CredentialsInvalid {
                path: path.to_path_buf(),
                message: "username and key must be non-empty".to_string(),
            });
        }

        Ok(Self {
            username: parsed.username,
            key: parsed.key,
        })
    }
}

/// Location of `kaggle.json`: `$KAGGLE_CONFIG_DIR` wins over `~/.kaggle`.
fn config_file_path() -> PathBuf {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir).join(CONFIG_FILE_NAME);
        }
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".kaggle")
        .join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_from_file_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), r#"{"username": "freshio", "key": "abc123"}"#);

        let credentials = KaggleCredentials::from_file(&path).unwrap();
        assert_eq!(credentials.username, "freshio");
        assert_eq!(credentials.key, "abc123");
    }

    #[test]
    fn test_from_file_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "not json at all");

        let err = KaggleCredentials::from_file(&path).unwrap_err();
        match err {
            KaggleError::CredentialsInvalid { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected CredentialsInvalid, got {other:?}"),
        }
    }

    #[test]
    fn test_from_file_empty_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), r#"{"username": "", "key": "abc123"}"#);

        let err = KaggleCredentials::from_file(&path).unwrap_err();
        assert!(matches!(err, KaggleError::CredentialsInvalid { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = KaggleCredentials::from_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap_err();
        assert!(matches!(err, KaggleError::Io(_)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let credentials = KaggleCredentials::new("freshio", "very-secret");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("freshio"));
        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
