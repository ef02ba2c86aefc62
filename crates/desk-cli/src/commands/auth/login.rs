use anyhow::Context;
use desk_core::entities::{LoginRequest, User};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
pub(super) struct AuthSessionResponse {
    pub authenticated: bool,
    pub user: User,
    pub token_type: String,
    pub token_source: Option<&'static str>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = LoginRequest {
        email: args.email.clone(),
        password: args.password.clone(),
    };
    let response = ctx.client.login(&request).await.context("login failed")?;
    let response = establish(ctx, response).await?;
    output(&response, flags.format)
}

/// Persist a fresh session, replace the context's session, and fetch the profile.
pub(super) async fn establish(
    ctx: &mut AppContext,
    tokens: desk_core::entities::AuthResponse,
) -> anyhow::Result<AuthSessionResponse> {
    let session = desk_auth::start_session(tokens).context("failed to store session")?;
    if let Some(previous) = ctx.session.replace(session) {
        previous.invalidate();
    }
    let session = ctx.require_session()?;
    let user = ctx
        .client
        .me(session)
        .await
        .context("logged in but failed to fetch profile")?;
    tracing::debug!(user_id = user.id, "session established");
    Ok(AuthSessionResponse {
        authenticated: true,
        user,
        token_type: session.token_type().to_string(),
        token_source: desk_auth::token_store::detect_token_source().map(|s| s.as_str()),
    })
}
