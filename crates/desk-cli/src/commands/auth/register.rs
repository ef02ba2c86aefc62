use anyhow::Context;
use desk_core::entities::RegisterRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthRegisterArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &AuthRegisterArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = RegisterRequest {
        email: args.email.clone(),
        username: args.username.clone(),
        password: args.password.clone(),
    };
    let tokens = ctx
        .client
        .register(&request)
        .await
        .context("registration failed")?;
    let response = super::login::establish(ctx, tokens).await?;
    output(&response, flags.format)
}
