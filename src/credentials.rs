//! Plaintext API token persisted in the configuration directory.
//!
//! The token is the entire content of `<config dir>/secret`. An empty file
//! means "unset". The directory and an empty file are created on first access.
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AxypeError;

/// File name of the stored token inside the configuration directory.
pub const SECRET_FILE: &str = "secret";

/// Reads and writes the API token.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    dir: PathBuf,
}

impl CredentialStore {
    /// Create a store rooted at `dir`. Nothing is touched until first access.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the secret file.
    #[must_use]
    pub fn secret_path(&self) -> PathBuf {
        self.dir.join(SECRET_FILE)
    }

    /// Create the configuration directory and an empty secret file if absent.
    ///
    /// # Errors
    ///
    /// Returns [`AxypeError::Credential`] if either cannot be created.
    pub fn ensure(&self) -> Result<PathBuf, AxypeError> {
        fs::create_dir_all(&self.dir).map_err(|source| credential_error(&self.dir, source))?;

        let path = self.secret_path();
        if !path.exists() {
            fs::write(&path, "").map_err(|source| credential_error(&path, source))?;
        }
        Ok(path)
    }

    /// Return the stored token, or an empty string when unset.
    ///
    /// # Errors
    ///
    /// Returns [`AxypeError::Credential`] if the file cannot be created or read.
    pub fn get_token(&self) -> Result<String, AxypeError> {
        let path = self.ensure()?;
        fs::read_to_string(&path).map_err(|source| credential_error(&path, source))
    }

    /// Overwrite the stored token. `None` clears it.
    ///
    /// # Errors
    ///
    /// Returns [`AxypeError::Credential`] if the file cannot be written.
    pub fn set_token(&self, token: Option<&str>) -> Result<(), AxypeError> {
        let path = self.ensure()?;
        fs::write(&path, token.unwrap_or_default())
            .map_err(|source| credential_error(&path, source))
    }
}

fn credential_error(path: &Path, source: std::io::Error) -> AxypeError {
    AxypeError::Credential {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, CredentialStore) {
        let tmp = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(tmp.path().join(".axype"));
        (tmp, store)
    }

    #[test]
    fn get_token_creates_directory_and_empty_file() {
        let (_tmp, store) = store();
        assert!(!store.secret_path().exists());
        assert_eq!(store.get_token().unwrap(), "");
        assert!(store.secret_path().is_file());
    }

    #[test]
    fn set_then_get_round_trips_exactly() {
        let (_tmp, store) = store();
        store.set_token(Some("abc123")).unwrap();
        assert_eq!(store.get_token().unwrap(), "abc123");
    }

    #[test]
    fn token_is_stored_verbatim() {
        let (_tmp, store) = store();
        store.set_token(Some("  spaced token\n")).unwrap();
        assert_eq!(
            fs::read_to_string(store.secret_path()).unwrap(),
            "  spaced token\n"
        );
    }

    #[test]
    fn clearing_returns_empty_string() {
        let (_tmp, store) = store();
        store.set_token(Some("abc123")).unwrap();
        store.set_token(None).unwrap();
        assert_eq!(store.get_token().unwrap(), "");
    }

    #[test]
    fn ensure_keeps_existing_token() {
        let (_tmp, store) = store();
        store.set_token(Some("keep-me")).unwrap();
        store.ensure().unwrap();
        assert_eq!(store.get_token().unwrap(), "keep-me");
    }

    #[test]
    fn unusable_directory_is_credential_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();
        let store = CredentialStore::new(&blocker);
        assert!(matches!(
            store.get_token(),
            Err(AxypeError::Credential { .. })
        ));
    }
}
