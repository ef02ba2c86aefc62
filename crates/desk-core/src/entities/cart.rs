use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::CandidateProduct;

/// A line in the shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// One unit of a reviewed product.
impl From<&CandidateProduct> for CartItem {
    fn from(product: &CandidateProduct) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image_url: Some(product.image_url.clone()).filter(|url| !url.is_empty()),
            quantity: 1,
        }
    }
}
