use anyhow::Context;
use desk_core::entities::TemplateCreate;

use super::body::overlay;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::TemplateUpdateArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &TemplateUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.require_session()?;
    let existing = ctx
        .client
        .get_template(args.id)
        .await
        .with_context(|| format!("failed to fetch template {}", args.id))?;

    let body = overlay(
        TemplateCreate::from(&existing),
        args.title.as_deref(),
        args.style.as_deref(),
        &args.fields,
        args.clear_items,
    )?;

    let template = ctx
        .client
        .update_template(session, args.id, &body)
        .await
        .with_context(|| format!("failed to update template {}", args.id))?;
    output(&template, flags.format)
}
