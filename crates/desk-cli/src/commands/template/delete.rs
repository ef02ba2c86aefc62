use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct TemplateDeleteResponse {
    id: i64,
    deleted: bool,
}

pub async fn handle(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.require_session()?;
    ctx.client
        .delete_template(session, id)
        .await
        .with_context(|| format!("failed to delete template {id}"))?;
    output(&TemplateDeleteResponse { id, deleted: true }, flags.format)
}
