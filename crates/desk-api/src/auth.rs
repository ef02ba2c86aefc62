//! `/auth` endpoints.

use desk_auth::Session;
use desk_core::entities::{AuthResponse, LoginRequest, RegisterRequest, User};

use crate::{
    DeskHubClient,
    error::ApiError,
    http::{check_response, json},
};

impl DeskHubClient {
    /// Create an account. The backend answers with a token pair.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the email/username is taken
    /// (FastAPI `detail` surfaced as the message).
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let resp = check_response(self.post("/auth/register").json(request).send().await?).await?;
        json(resp).await
    }

    /// Exchange credentials for a token pair.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] for bad credentials.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let resp = check_response(self.post("/auth/login").json(request).send().await?).await?;
        json(resp).await
    }

    /// Profile of the session's user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] if the token is rejected.
    pub async fn me(&self, session: &Session) -> Result<User, ApiError> {
        let resp = check_response(
            self.authed(reqwest::Method::GET, "/auth/me", session)
                .send()
                .await?,
        )
        .await?;
        json(resp).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_token_response() {
        let data: AuthResponse =
            serde_json::from_str(r#"{"access_token":"eyJhbGciOi.x.y","token_type":"bearer"}"#)
                .unwrap();
        assert_eq!(data.token_type, "bearer");
        let session = Session::issue(data).unwrap();
        assert_eq!(session.authorization(), "Bearer eyJhbGciOi.x.y");
    }

    #[test]
    fn parse_me_response() {
        let user: User = serde_json::from_str(
            r#"{"id":7,"email":"kol@deskhub.example","username":"kol","avatar_url":null}"#,
        )
        .unwrap();
        assert_eq!(user.id, 7);
        assert!(user.avatar_url.is_none());
    }

    #[test]
    fn register_body_has_backend_field_names() {
        let body = serde_json::to_value(RegisterRequest {
            email: "a@b.c".into(),
            username: "abc".into(),
            password: "pw".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"email": "a@b.c", "username": "abc", "password": "pw"})
        );
    }
}
