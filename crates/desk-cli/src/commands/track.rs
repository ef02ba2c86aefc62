use anyhow::Context;
use desk_core::entities::TrackClick;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TrackCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `deskhub track <subcommand>`.
pub async fn handle(
    action: &TrackCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TrackCommands::View { template_id } => {
            let response = ctx
                .client
                .track_view(*template_id)
                .await
                .with_context(|| format!("failed to track view of template {template_id}"))?;
            output(&response, flags.format)
        }
        TrackCommands::Click {
            product,
            platform,
            template,
        } => {
            let platform = platform.trim().to_ascii_lowercase();
            if platform.is_empty() {
                anyhow::bail!("platform must not be empty");
            }
            let click = TrackClick {
                template_id: *template,
                product_id: *product,
                platform,
            };
            let response = ctx
                .client
                .track_click(&click)
                .await
                .context("failed to track click")?;
            output(&response, flags.format)
        }
    }
}
