use clap::{Args, Subcommand};

/// Product catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProductCommands {
    /// Browse products.
    List {
        #[arg(long)]
        category_id: Option<i64>,
        /// Search by name.
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Get a product by ID.
    Get { id: i64 },
    /// Add a product.
    Create(ProductCreateArgs),
    /// Change fields of a product.
    Update(ProductUpdateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProductCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub price: f64,
    #[arg(long)]
    pub category_id: i64,
    #[command(flatten)]
    pub fields: ProductFieldArgs,
}

#[derive(Clone, Debug, Args)]
pub struct ProductUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub category_id: Option<i64>,
    #[command(flatten)]
    pub fields: ProductFieldArgs,
}

#[derive(Clone, Debug, Default, Args)]
pub struct ProductFieldArgs {
    #[arg(long)]
    pub brand: Option<String>,
    /// ISO currency code (backend default CNY).
    #[arg(long)]
    pub currency: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
    /// Spec sheet entry as `KEY=VALUE`. Repeatable.
    #[arg(long)]
    pub spec: Vec<String>,
}
