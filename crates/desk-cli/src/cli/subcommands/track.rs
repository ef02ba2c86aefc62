use clap::Subcommand;

/// Engagement tracking commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TrackCommands {
    /// Count a template view.
    View { template_id: i64 },
    /// Record a purchase link click.
    Click {
        #[arg(long)]
        product: i64,
        /// Store the link pointed to (e.g. amazon, jd).
        #[arg(long)]
        platform: String,
        /// Template the click came from.
        #[arg(long)]
        template: Option<i64>,
    },
}
