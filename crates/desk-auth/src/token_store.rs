//! Persists the session token between CLI invocations.
//!
//! Load order: OS keyring → `DESKHUB_AUTH__TOKEN` env → `~/.deskhub/credentials`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "deskhub-cli";
const KEYRING_USER: &str = "access-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";
const TOKEN_ENV: &str = "DESKHUB_AUTH__TOKEN";

/// Tier a stored token was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

/// Keyring service name. Override via `DESKHUB_KEYRING_SERVICE` in tests.
fn keyring_service() -> String {
    std::env::var("DESKHUB_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

fn keyring_entry() -> Result<keyring::Entry, AuthError> {
    keyring::Entry::new(&keyring_service(), KEYRING_USER)
        .map_err(|e| AuthError::KeyringError(e.to_string()))
}

/// Store a token in the OS keychain. Falls back to file if keyring unavailable.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
pub fn store(token: &str) -> Result<(), AuthError> {
    match keyring_entry().and_then(|entry| {
        entry
            .set_password(token)
            .map_err(|e| AuthError::KeyringError(e.to_string()))
    }) {
        Ok(()) => Ok(()),
        Err(error) => {
            tracing::warn!(%error, "keyring store failed; falling back to file");
            store_file(&credentials_path()?, token)
        }
    }
}

/// Load a stored token, trying each tier in order.
#[must_use]
pub fn load() -> Option<String> {
    load_with_source().map(|(token, _)| token)
}

/// Like [`load`], also reporting the tier the token came from.
#[must_use]
pub fn load_with_source() -> Option<(String, TokenSource)> {
    if let Ok(entry) = keyring_entry()
        && let Ok(token) = entry.get_password()
        && !token.trim().is_empty()
    {
        return Some((token, TokenSource::Keyring));
    }

    if let Ok(token) = std::env::var(TOKEN_ENV)
        && !token.trim().is_empty()
    {
        return Some((token, TokenSource::Env));
    }

    credentials_path()
        .ok()
        .and_then(|path| load_file(&path))
        .map(|token| (token, TokenSource::File))
}

/// Delete stored credentials from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    // A missing keyring entry is fine.
    if let Ok(entry) = keyring_entry() {
        let _ = entry.delete_credential();
    }
    delete_file(&credentials_path()?)
}

/// Detect which tier the current token came from (for status display).
#[must_use]
pub fn detect_token_source() -> Option<TokenSource> {
    load_with_source().map(|(_, source)| source)
}

// --- File helpers ---

pub(crate) fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".deskhub").join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found, cannot store credentials".into())
        })
}

pub(crate) fn store_file(path: &Path, token: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, token)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

pub(crate) fn load_file(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub(crate) fn delete_file(path: &Path) -> Result<(), AuthError> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}
