use anyhow::Context;
use desk_core::entities::ProductUpdate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProductUpdateArgs;
use crate::commands::shared::parse::parse_specs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &ProductUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let changes = changes(args)?;
    if changes.is_empty() {
        anyhow::bail!("nothing to update: pass at least one field flag");
    }
    let session = ctx.require_session()?;
    let product = ctx
        .client
        .update_product(session, args.id, &changes)
        .await
        .with_context(|| format!("failed to update product {}", args.id))?;
    output(&product, flags.format)
}

fn changes(args: &ProductUpdateArgs) -> anyhow::Result<ProductUpdate> {
    if let Some(price) = args.price
        && (!price.is_finite() || price < 0.0)
    {
        anyhow::bail!("invalid price {price}: must be a non-negative number");
    }
    Ok(ProductUpdate {
        name: args.name.clone(),
        brand: args.fields.brand.clone(),
        price: args.price,
        currency: args.fields.currency.clone(),
        image_url: args.fields.image_url.clone(),
        category_id: args.category_id,
        specs: parse_specs(&args.fields.spec)?,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::changes;
    use crate::cli::subcommands::ProductUpdateArgs;
    use crate::cli::subcommands::product::ProductFieldArgs;

    fn args() -> ProductUpdateArgs {
        ProductUpdateArgs {
            id: 4,
            name: None,
            price: None,
            category_id: None,
            fields: ProductFieldArgs::default(),
        }
    }

    #[test]
    fn no_flags_is_empty() {
        assert!(changes(&args()).unwrap().is_empty());
    }

    #[test]
    fn only_set_fields_are_sent() {
        let mut args = args();
        args.price = Some(499.0);
        args.fields.spec = vec!["ports=4".into()];
        let body = serde_json::to_value(changes(&args).unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"price": 499.0, "specs": {"ports": 4}}));
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut args = args();
        args.price = Some(-1.0);
        assert!(changes(&args).is_err());
    }
}
