use desk_api::ApiError;
use desk_core::entities::User;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user: Option<User>,
    token_source: Option<&'static str>,
    session_started_at: Option<String>,
    backend: String,
    note: Option<String>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let backend = ctx.client.base_url().to_string();
    let token_source = desk_auth::token_store::detect_token_source().map(|s| s.as_str());

    let status = match &ctx.session {
        None => AuthStatusResponse {
            authenticated: false,
            user: None,
            token_source: None,
            session_started_at: None,
            backend,
            note: Some("no stored token, run `deskhub auth login`".into()),
        },
        Some(session) => {
            let started = Some(session.started_at().to_rfc3339());
            match ctx.client.me(session).await {
                Ok(user) => AuthStatusResponse {
                    authenticated: true,
                    user: Some(user),
                    token_source,
                    session_started_at: started,
                    backend,
                    note: None,
                },
                Err(error) => AuthStatusResponse {
                    authenticated: false,
                    user: None,
                    token_source,
                    session_started_at: started,
                    backend,
                    note: Some(status_note(&error)),
                },
            }
        }
    };

    output(&status, flags.format)
}

fn status_note(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized(_) => "stored token was rejected, log in again".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use desk_api::ApiError;

    use super::status_note;

    #[test]
    fn rejected_token_suggests_login() {
        let note = status_note(&ApiError::Unauthorized("Could not validate credentials".into()));
        assert!(note.contains("log in again"));
    }

    #[test]
    fn other_errors_pass_through() {
        let note = status_note(&ApiError::Api {
            status: 502,
            message: "bad gateway".into(),
        });
        assert!(note.contains("502"));
    }
}
