use anyhow::Context;
use desk_api::FeedQuery;
use desk_core::enums::Style;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FeedArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `deskhub feed`.
pub async fn handle(args: &FeedArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let style = args
        .style
        .as_deref()
        .map(|raw| parse_enum::<Style>(raw, "style"))
        .transpose()?
        .map(|style| style.as_str().to_string());

    let query = FeedQuery {
        cursor: args.cursor,
        style,
        limit: effective_limit(flags.limit, ctx.config.general.default_limit),
    };
    let page = ctx.client.feed(&query).await.context("failed to load feed")?;
    tracing::debug!(
        rows = page.data.len(),
        has_more = page.has_more,
        "feed page loaded"
    );
    output(&page, flags.format)
}
