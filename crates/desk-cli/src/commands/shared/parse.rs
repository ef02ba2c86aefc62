use anyhow::Context;
use desk_core::entities::{TagPosition, TemplateItemCreate};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a `PRODUCT_ID:X:Y` tag into a template item.
pub fn parse_item(raw: &str) -> anyhow::Result<TemplateItemCreate> {
    let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
    let [product, x, y] = parts.as_slice() else {
        anyhow::bail!("invalid item '{raw}': expected PRODUCT_ID:X:Y");
    };
    let product_id = product
        .parse::<i64>()
        .with_context(|| format!("invalid item '{raw}': bad product id"))?;
    let x = x
        .parse::<f64>()
        .with_context(|| format!("invalid item '{raw}': bad x position"))?;
    let y = y
        .parse::<f64>()
        .with_context(|| format!("invalid item '{raw}': bad y position"))?;
    let position = TagPosition::new(x, y).with_context(|| format!("invalid item '{raw}'"))?;
    Ok(TemplateItemCreate::new(product_id, position))
}

/// Build a spec sheet object from `KEY=VALUE` pairs.
///
/// Values that parse as JSON (numbers, booleans, arrays) keep their type;
/// anything else is stored as a string. Later keys overwrite earlier ones.
pub fn parse_specs(raw: &[String]) -> anyhow::Result<Option<Value>> {
    if raw.is_empty() {
        return Ok(None);
    }
    let mut specs = Map::new();
    for entry in raw {
        let Some((key, value)) = entry.split_once('=') else {
            anyhow::bail!("invalid spec '{entry}': expected KEY=VALUE");
        };
        let key = key.trim();
        if key.is_empty() {
            anyhow::bail!("invalid spec '{entry}': empty key");
        }
        let value = value.trim();
        let parsed = serde_json::from_str::<Value>(value)
            .ok()
            .filter(|v| !v.is_object())
            .unwrap_or_else(|| Value::String(value.to_string()));
        specs.insert(key.to_string(), parsed);
    }
    Ok(Some(Value::Object(specs)))
}
