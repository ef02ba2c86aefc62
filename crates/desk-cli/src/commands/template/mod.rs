mod body;
mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TemplateCommands;
use crate::context::AppContext;

/// Handle `deskhub template <subcommand>`.
pub async fn handle(
    action: &TemplateCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TemplateCommands::List { skip, mine } => list::handle(*skip, *mine, ctx, flags).await,
        TemplateCommands::Get { id } => get::handle(*id, ctx, flags).await,
        TemplateCommands::Create(args) => create::handle(args, ctx, flags).await,
        TemplateCommands::Update(args) => update::handle(args, ctx, flags).await,
        TemplateCommands::Delete { id } => delete::handle(*id, ctx, flags).await,
    }
}
