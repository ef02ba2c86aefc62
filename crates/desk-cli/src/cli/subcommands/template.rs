use clap::{Args, Subcommand};

/// Desk setup template commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TemplateCommands {
    /// List templates, newest first.
    List {
        /// Number of templates to skip.
        #[arg(long, default_value_t = 0)]
        skip: u32,
        /// Only templates created by the logged-in user.
        #[arg(long)]
        mine: bool,
    },
    /// Get a template by ID.
    Get { id: i64 },
    /// Publish a new template.
    Create(TemplateCreateArgs),
    /// Replace fields of an existing template.
    Update(TemplateUpdateArgs),
    /// Delete a template.
    Delete { id: i64 },
}

#[derive(Clone, Debug, Args)]
pub struct TemplateCreateArgs {
    #[arg(long)]
    pub title: String,
    /// Style tag (minimal, modern, cyberpunk, warm, industrial, scandinavian).
    #[arg(long)]
    pub style: String,
    #[command(flatten)]
    pub fields: TemplateBodyArgs,
}

#[derive(Clone, Debug, Args)]
pub struct TemplateUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub style: Option<String>,
    #[command(flatten)]
    pub fields: TemplateBodyArgs,
    /// Remove every tagged product.
    #[arg(long, conflicts_with = "item")]
    pub clear_items: bool,
}

/// Fields shared by create and update.
#[derive(Clone, Debug, Default, Args)]
pub struct TemplateBodyArgs {
    #[arg(long)]
    pub description: Option<String>,
    /// Cover image URL.
    #[arg(long, conflicts_with = "cover_image_file")]
    pub cover_image_url: Option<String>,
    /// Local image embedded as a data URL.
    #[arg(long)]
    pub cover_image_file: Option<std::path::PathBuf>,
    /// Tagged product as `PRODUCT_ID:X:Y` (percent of image). Repeatable.
    #[arg(long)]
    pub item: Vec<String>,
}
