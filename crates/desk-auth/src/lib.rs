//! # desk-auth
//!
//! Explicit sessions for DeskHub.
//!
//! A [`Session`] is issued from the backend's token response at login or
//! register, passed by reference to every authenticated call, and consumed at
//! logout. Between invocations only the raw token is kept, in the OS keychain
//! (`keyring`) or a `0600` credentials file.

pub mod error;
pub mod session;
pub mod token_store;

pub use error::AuthError;
pub use session::{Session, SessionOrigin};
pub use token_store::TokenSource;

use desk_core::entities::AuthResponse;

/// Issue a session from a login/register response and persist its token.
///
/// # Errors
///
/// Returns `AuthError` if the response is empty or the token cannot be stored.
pub fn start_session(response: AuthResponse) -> Result<Session, AuthError> {
    let session = Session::issue(response)?;
    token_store::store(session.token())?;
    Ok(session)
}

/// Restore the session persisted by a previous invocation, if any.
#[must_use]
pub fn resume_session() -> Option<Session> {
    token_store::load().and_then(|token| Session::restore(&token))
}

/// Like [`resume_session`] but failing when nobody is logged in.
///
/// # Errors
///
/// Returns [`AuthError::NotAuthenticated`] when no token is stored.
pub fn require_session() -> Result<Session, AuthError> {
    resume_session().ok_or(AuthError::NotAuthenticated)
}

/// End the session and clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn logout(session: Option<Session>) -> Result<(), AuthError> {
    if let Some(session) = session {
        session.invalidate();
    }
    token_store::delete()
}
