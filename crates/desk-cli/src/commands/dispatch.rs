use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Template { action } => commands::template::handle(&action, ctx, flags).await,
        Commands::Product { action } => commands::product::handle(&action, ctx, flags).await,
        Commands::Feed(args) => commands::feed::handle(&args, ctx, flags).await,
        Commands::Track { action } => commands::track::handle(&action, ctx, flags).await,
        Commands::Configure(args) => commands::configure::handle(&args, ctx, flags).await,
    }
}
