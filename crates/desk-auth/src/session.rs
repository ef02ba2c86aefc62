//! The authenticated session handed to every call that needs a bearer token.

use chrono::{DateTime, Utc};
use desk_core::entities::AuthResponse;

use crate::error::AuthError;

const DEFAULT_TOKEN_TYPE: &str = "bearer";

/// Where a session's token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOrigin {
    /// Issued by a register or login call in this process.
    Issued,
    /// Rebuilt from a token persisted by an earlier invocation.
    Restored,
}

/// A live session. Created by login or register, consumed by logout.
///
/// Not `Clone`: one session per flow, and logout takes it by value.
#[derive(PartialEq, Eq)]
pub struct Session {
    token: String,
    token_type: String,
    origin: SessionOrigin,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Issue a session from the backend's token response.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmptyToken`] if the response has no token.
    pub fn issue(response: AuthResponse) -> Result<Self, AuthError> {
        let token = response.access_token.trim().to_string();
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }
        let token_type = if response.token_type.trim().is_empty() {
            DEFAULT_TOKEN_TYPE.to_string()
        } else {
            response.token_type
        };
        tracing::debug!(%token_type, "session issued");
        Ok(Self {
            token,
            token_type,
            origin: SessionOrigin::Issued,
            started_at: Utc::now(),
        })
    }

    /// Rebuild a session from a persisted token. Blank tokens yield `None`.
    #[must_use]
    pub fn restore(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        Some(Self {
            token: token.to_string(),
            token_type: DEFAULT_TOKEN_TYPE.to_string(),
            origin: SessionOrigin::Restored,
            started_at: Utc::now(),
        })
    }

    /// Raw access token, for persistence only.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    #[must_use]
    pub const fn origin(&self) -> SessionOrigin {
        self.origin
    }

    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Value for the `Authorization` header.
    ///
    /// The backend issues `token_type = "bearer"`; the header scheme is always
    /// sent capitalized.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// End the session. The value is consumed so it cannot be used again.
    pub fn invalidate(self) {
        tracing::debug!(origin = ?self.origin, "session invalidated");
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("origin", &self.origin)
            .field("started_at", &self.started_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn response(token: &str, token_type: &str) -> AuthResponse {
        AuthResponse {
            access_token: token.into(),
            token_type: token_type.into(),
        }
    }

    #[test]
    fn issue_builds_bearer_header() {
        let session = Session::issue(response("jwt-abc", "bearer")).unwrap();
        assert_eq!(session.authorization(), "Bearer jwt-abc");
        assert_eq!(session.origin(), SessionOrigin::Issued);
    }

    #[test]
    fn issue_rejects_empty_token() {
        let err = Session::issue(response("  ", "bearer")).unwrap_err();
        assert!(matches!(err, AuthError::EmptyToken));
    }

    #[test]
    fn blank_token_type_defaults_to_bearer() {
        let session = Session::issue(response("jwt", "")).unwrap();
        assert_eq!(session.token_type(), "bearer");
    }

    #[test]
    fn restore_trims_and_skips_blank() {
        assert!(Session::restore("\n").is_none());
        let session = Session::restore(" jwt-xyz\n").unwrap();
        assert_eq!(session.token(), "jwt-xyz");
        assert_eq!(session.origin(), SessionOrigin::Restored);
    }

    #[test]
    fn debug_redacts_token() {
        let session = Session::restore("super-secret").unwrap();
        assert!(!format!("{session:?}").contains("super-secret"));
    }
}
