use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let product = ctx
        .client
        .get_product(id)
        .await
        .with_context(|| format!("failed to fetch product {id}"))?;
    output(&product, flags.format)
}
