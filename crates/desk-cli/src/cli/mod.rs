use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `deskhub` binary.
#[derive(Debug, Parser)]
#[command(
    name = "deskhub",
    version,
    about = "DeskHub - discover, share, and configure desk setups"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Colorize table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Show spinners: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            color: self.color,
            progress: self.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands, OutputFormat, ProgressMode};
    use crate::cli::subcommands::{AuthCommands, TemplateCommands, TrackCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "deskhub", "--format", "table", "--limit", "10", "--verbose", "feed",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Feed(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["deskhub", "auth", "status", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Status
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["deskhub", "--format", "xml", "feed"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn color_and_progress_modes_parse() {
        let cli = Cli::try_parse_from(["deskhub", "--color", "never", "--progress", "off", "feed"])
            .expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.color, ColorMode::Never);
        assert_eq!(flags.progress, ProgressMode::Off);
    }

    #[test]
    fn template_create_collects_repeated_items() {
        let cli = Cli::try_parse_from([
            "deskhub", "template", "create", "--title", "Night desk", "--style", "cyberpunk",
            "--item", "3:10:20", "--item", "4:50:50",
        ])
        .expect("cli should parse");

        let Commands::Template {
            action: TemplateCommands::Create(args),
        } = cli.command
        else {
            panic!("expected template create");
        };
        assert_eq!(args.fields.item, ["3:10:20", "4:50:50"]);
        assert_eq!(args.title, "Night desk");
    }

    #[test]
    fn cover_image_url_and_file_conflict() {
        let parsed = Cli::try_parse_from([
            "deskhub", "template", "create", "--title", "t", "--style", "warm",
            "--cover-image-url", "https://x", "--cover-image-file", "a.png",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn track_click_template_is_optional() {
        let cli = Cli::try_parse_from([
            "deskhub", "track", "click", "--product", "4", "--platform", "amazon",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Track {
                action: TrackCommands::Click { template: None, product: 4, .. }
            }
        ));
    }

    #[test]
    fn configure_accepts_repeated_swaps() {
        let cli = Cli::try_parse_from([
            "deskhub", "configure", "--budget", "5000", "--swap", "2", "--swap", "4", "--purchase",
        ])
        .expect("cli should parse");
        let Commands::Configure(args) = cli.command else {
            panic!("expected configure");
        };
        assert_eq!(args.swap, ["2", "4"]);
        assert!(args.purchase);
        assert_eq!(args.budget.as_deref(), Some("5000"));
    }
}
