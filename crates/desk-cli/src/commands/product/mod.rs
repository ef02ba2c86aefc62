mod create;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProductCommands;
use crate::context::AppContext;

/// Handle `deskhub product <subcommand>`.
pub async fn handle(
    action: &ProductCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProductCommands::List {
            category_id,
            query,
            offset,
        } => list::handle(*category_id, query.as_deref(), *offset, ctx, flags).await,
        ProductCommands::Get { id } => get::handle(*id, ctx, flags).await,
        ProductCommands::Create(args) => create::handle(args, ctx, flags).await,
        ProductCommands::Update(args) => update::handle(args, ctx, flags).await,
    }
}
