use anyhow::Context;
use desk_core::entities::{TemplateCreate, TemplateItemCreate};
use desk_core::enums::Style;

use crate::cli::subcommands::TemplateBodyArgs;
use crate::commands::shared::parse::{parse_enum, parse_item};

/// Canonical style tag for the backend.
pub fn style_tag(raw: &str) -> anyhow::Result<String> {
    Ok(parse_enum::<Style>(raw, "style")?.as_str().to_string())
}

pub fn parse_items(raw: &[String]) -> anyhow::Result<Vec<TemplateItemCreate>> {
    raw.iter().map(|item| parse_item(item)).collect()
}

/// Cover image from `--cover-image-url` or an inlined `--cover-image-file`.
pub fn cover_image(fields: &TemplateBodyArgs) -> anyhow::Result<Option<String>> {
    if let Some(path) = &fields.cover_image_file {
        let data_url = desk_api::cover::data_url_from_file(path)
            .with_context(|| format!("failed to read cover image {}", path.display()))?;
        return Ok(Some(data_url));
    }
    Ok(fields.cover_image_url.clone())
}

/// Overlay the flags given on the command line onto an existing template body.
///
/// Items are replaced when any `--item` is given, cleared with `clear_items`,
/// and otherwise kept.
pub fn overlay(
    mut body: TemplateCreate,
    title: Option<&str>,
    style: Option<&str>,
    fields: &TemplateBodyArgs,
    clear_items: bool,
) -> anyhow::Result<TemplateCreate> {
    if let Some(title) = title {
        body.title = title.to_string();
    }
    if let Some(style) = style {
        body.style = style_tag(style)?;
    }
    if let Some(description) = &fields.description {
        body.description = Some(description.clone());
    }
    if let Some(cover) = cover_image(fields)? {
        body.cover_image_url = Some(cover);
    }
    if clear_items {
        body.items.clear();
    } else if !fields.item.is_empty() {
        body.items = parse_items(&fields.item)?;
    }
    Ok(body)
}
