//! Compatibility review of a generated product list.

use desk_core::entities::{CandidateProduct, Configuration};
use desk_core::responses::ReviewSummary;

use crate::catalog::{SubstitutionTable, generate_candidates};
use crate::purchase::PurchaseGate;

/// Percentage of compatible products, rounded. An empty list scores 0.
#[must_use]
pub fn compute_score(products: &[CandidateProduct]) -> u8 {
    if products.is_empty() {
        return 0;
    }
    let compatible = products.iter().filter(|p| p.compatible).count();
    let percent = (compatible * 100 + products.len() / 2) / products.len();
    u8::try_from(percent).unwrap_or(100)
}

/// Replace product `id` with its best-ranked substitute from the built-in
/// table. Unknown ids, compatible products and unmapped failures return the
/// list unchanged.
#[must_use]
pub fn swap_product(
    products: &[CandidateProduct],
    id: &str,
    config: &Configuration,
) -> Vec<CandidateProduct> {
    let mut swapped = products.to_vec();
    swap_in_place(&mut swapped, id, config, &SubstitutionTable::builtin());
    swapped
}

/// What a swap request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    Swapped { id: String, replacement: String },
    AlreadyCompatible,
    NoSubstitute,
    UnknownId,
}

fn swap_in_place(
    products: &mut [CandidateProduct],
    id: &str,
    config: &Configuration,
    table: &SubstitutionTable,
) -> SwapOutcome {
    let Some(product) = products.iter_mut().find(|p| p.id == id) else {
        tracing::debug!(id, "swap ignored: unknown product");
        return SwapOutcome::UnknownId;
    };
    let Some(reason) = product.failure(config) else {
        tracing::debug!(id, "swap ignored: already compatible");
        return SwapOutcome::AlreadyCompatible;
    };
    let Some(substitute) = table.pick(reason, product.category, config) else {
        tracing::debug!(id, %reason, category = %product.category, "swap ignored: no substitute");
        return SwapOutcome::NoSubstitute;
    };
    substitute.apply(product, config);
    tracing::debug!(id, replacement = substitute.name, "product swapped");
    SwapOutcome::Swapped {
        id: id.to_string(),
        replacement: substitute.name.to_string(),
    }
}

/// One review session: a configuration and its current product list.
#[derive(Debug, Clone)]
pub struct Review {
    configuration: Configuration,
    products: Vec<CandidateProduct>,
    substitutes: SubstitutionTable,
}

impl Review {
    /// Generate the candidate list for `configuration`.
    #[must_use]
    pub fn new(configuration: Configuration) -> Self {
        Self::with_table(configuration, SubstitutionTable::builtin())
    }

    #[must_use]
    pub fn with_table(configuration: Configuration, substitutes: SubstitutionTable) -> Self {
        Self {
            products: generate_candidates(&configuration),
            configuration,
            substitutes,
        }
    }

    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    #[must_use]
    pub fn products(&self) -> &[CandidateProduct] {
        &self.products
    }

    #[must_use]
    pub fn score(&self) -> u8 {
        compute_score(&self.products)
    }

    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.products.iter().map(|p| p.price).sum()
    }

    #[must_use]
    pub fn over_budget(&self) -> bool {
        self.total_price() > self.configuration.budget
    }

    pub fn incompatible(&self) -> impl Iterator<Item = &CandidateProduct> {
        self.products.iter().filter(|p| !p.compatible)
    }

    pub fn swap(&mut self, id: &str) -> SwapOutcome {
        swap_in_place(&mut self.products, id, &self.configuration, &self.substitutes)
    }

    /// Try a swap for every incompatible product, returning each id with its outcome.
    pub fn swap_all(&mut self) -> Vec<(String, SwapOutcome)> {
        let ids: Vec<String> = self.incompatible().map(|p| p.id.clone()).collect();
        ids.into_iter()
            .map(|id| {
                let outcome = self.swap(&id);
                (id, outcome)
            })
            .collect()
    }

    #[must_use]
    pub fn summary(&self, gate: PurchaseGate) -> ReviewSummary {
        let score = self.score();
        ReviewSummary {
            configuration: self.configuration,
            products: self.products.clone(),
            score,
            total_price: self.total_price(),
            budget: self.configuration.budget,
            over_budget: self.over_budget(),
            incompatible_count: self.incompatible().count(),
            purchase_allowed: gate.allows(score),
        }
    }

    #[must_use]
    pub fn into_products(self) -> Vec<CandidateProduct> {
        self.products
    }
}
