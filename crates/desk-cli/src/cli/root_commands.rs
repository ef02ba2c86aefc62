use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, ProductCommands, TemplateCommands, TrackCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Account and session management.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Desk setup templates.
    Template {
        #[command(subcommand)]
        action: TemplateCommands,
    },
    /// Product catalog.
    Product {
        #[command(subcommand)]
        action: ProductCommands,
    },
    /// Discovery feed.
    Feed(FeedArgs),
    /// View and click tracking.
    Track {
        #[command(subcommand)]
        action: TrackCommands,
    },
    /// Run the setup configurator and review the recommended products.
    Configure(ConfigureArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FeedArgs {
    /// Only templates with this style.
    #[arg(long)]
    pub style: Option<String>,
    /// `next_cursor` from the previous page.
    #[arg(long)]
    pub cursor: Option<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct ConfigureArgs {
    /// Desk width in cm (default 120).
    #[arg(long, allow_hyphen_values = true)]
    pub width: Option<String>,
    /// Desk depth in cm (default 60).
    #[arg(long, allow_hyphen_values = true)]
    pub depth: Option<String>,
    /// Budget (default 5000).
    #[arg(long, allow_hyphen_values = true)]
    pub budget: Option<String>,
    /// work, gaming, balanced, creative
    #[arg(long)]
    pub purpose: Option<String>,
    /// minimal, modern, cyberpunk, warm, industrial, scandinavian
    #[arg(long)]
    pub style: Option<String>,
    /// Swap the product with this ID for a compatible one. Repeatable.
    #[arg(long)]
    pub swap: Vec<String>,
    /// Swap every incompatible product that has a substitute.
    #[arg(long)]
    pub swap_all: bool,
    /// Show purchase links if the setup passes the compatibility gate.
    #[arg(long)]
    pub purchase: bool,
}
