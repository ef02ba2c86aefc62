use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    skip: u32,
    mine: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let mut templates = ctx
        .client
        .list_templates(skip, limit)
        .await
        .context("failed to list templates")?;

    if mine {
        let session = ctx.require_session()?;
        let me = ctx.client.me(session).await.context("failed to fetch profile")?;
        templates.retain(|template| template.is_created_by(me.id));
    }

    output(&templates, flags.format)
}
