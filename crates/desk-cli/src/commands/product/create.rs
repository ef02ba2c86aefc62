use anyhow::Context;
use desk_core::entities::ProductCreate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProductCreateArgs;
use crate::commands::shared::parse::parse_specs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &ProductCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !args.price.is_finite() || args.price < 0.0 {
        anyhow::bail!("invalid price {}: must be a non-negative number", args.price);
    }
    let session = ctx.require_session()?;
    let body = ProductCreate {
        name: args.name.clone(),
        brand: args.fields.brand.clone(),
        price: args.price,
        currency: args.fields.currency.clone(),
        image_url: args.fields.image_url.clone(),
        category_id: args.category_id,
        specs: parse_specs(&args.fields.spec)?,
    };
    let product = ctx
        .client
        .create_product(session, &body)
        .await
        .context("failed to create product")?;
    output(&product, flags.format)
}
