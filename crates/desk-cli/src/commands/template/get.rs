use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let template = ctx
        .client
        .get_template(id)
        .await
        .with_context(|| format!("failed to fetch template {id}"))?;
    output(&template, flags.format)
}
