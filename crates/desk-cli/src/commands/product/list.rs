use anyhow::Context;
use desk_api::ProductQuery;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    category_id: Option<i64>,
    query: Option<&str>,
    offset: u32,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = ProductQuery {
        category_id,
        q: query.map(str::to_string),
        limit: effective_limit(flags.limit, ctx.config.general.default_limit),
        offset,
    };
    let products = ctx
        .client
        .list_products(&query)
        .await
        .context("failed to list products")?;
    output(&products, flags.format)
}
