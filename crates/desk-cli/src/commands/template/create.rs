use anyhow::Context;
use desk_core::entities::TemplateCreate;

use super::body::{cover_image, parse_items, style_tag};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::TemplateCreateArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &TemplateCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.require_session()?;
    let body = TemplateCreate {
        title: args.title.clone(),
        description: args.fields.description.clone(),
        style: style_tag(&args.style)?,
        cover_image_url: cover_image(&args.fields)?,
        items: parse_items(&args.fields.item)?,
    };
    let template = ctx
        .client
        .create_template(session, &body)
        .await
        .context("failed to create template")?;
    tracing::info!(id = template.id, items = template.items.len(), "template published");
    output(&template, flags.format)
}
