//! Response types returned as JSON by `deskhub` commands.
//!
//! These structs define the shape of `deskhub configure` output: the review of
//! a generated product list and, when purchase is permitted, the purchase plan.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CandidateProduct, Configuration};

/// Snapshot of a compatibility review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReviewSummary {
    pub configuration: Configuration,
    pub products: Vec<CandidateProduct>,
    /// Percentage of compatible products, `0..=100`.
    pub score: u8,
    pub total_price: f64,
    pub budget: f64,
    pub over_budget: bool,
    pub incompatible_count: usize,
    /// Whether the score passes the purchase gate.
    pub purchase_allowed: bool,
}

/// A partner store offering a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PurchaseLink {
    pub platform: String,
    pub url: String,
    /// Partner commission in percent.
    pub commission_pct: f64,
}

/// One product of a purchase plan and where to buy it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PurchaseLine {
    pub product: CandidateProduct,
    pub links: Vec<PurchaseLink>,
}

/// Purchase links for a fully reviewed product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PurchasePlan {
    pub lines: Vec<PurchaseLine>,
    pub item_count: u32,
    /// Estimated total; actual prices depend on the partner store.
    pub total_price: f64,
}
