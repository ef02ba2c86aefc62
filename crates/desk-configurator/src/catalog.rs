//! The recommended product set and its substitution table.

use desk_core::entities::{CandidateProduct, Configuration, Requirement};
use desk_core::enums::{CandidateCategory, FailureReason};

pub const CHAIR_MIN_BUDGET: f64 = 8000.0;
pub const ARM_MIN_DEPTH: f64 = 50.0;

pub const CHAIR_OVER_BUDGET: &str = "Over budget, recommend replacing with more affordable option";
pub const ARM_TOO_DEEP: &str = "Insufficient desk depth, arm may extend beyond desk edge";

fn candidate(
    id: &str,
    name: &str,
    category: CandidateCategory,
    price: f64,
    image_url: &str,
    specs: String,
    requirement: Option<Requirement>,
) -> CandidateProduct {
    CandidateProduct {
        id: id.to_string(),
        name: name.to_string(),
        category,
        price,
        image_url: image_url.to_string(),
        specs,
        compatible: true,
        issue: None,
        requirement,
    }
}

/// The six recommended products, evaluated against `config`.
///
/// Ids `"1"`..`"6"` are stable across calls.
#[must_use]
pub fn generate_candidates(config: &Configuration) -> Vec<CandidateProduct> {
    vec![
        candidate(
            "1",
            "IKEA BEKANT Electric Standing Desk",
            CandidateCategory::Desk,
            2999.0,
            "https://images.unsplash.com/photo-1595515106969-1ce29566ff1c?w=400",
            format!("{}cm × {}cm", config.space_width, config.space_depth),
            None,
        ),
        candidate(
            "2",
            "Herman Miller Aeron Ergonomic Chair",
            CandidateCategory::Chair,
            8999.0,
            "https://images.unsplash.com/photo-1580480055273-228ff5388ef8?w=400",
            "Adjustable height, lumbar support".into(),
            Some(Requirement::min_budget(CHAIR_MIN_BUDGET, CHAIR_OVER_BUDGET)),
        ),
        candidate(
            "3",
            "LG 27\" 4K UHD Monitor",
            CandidateCategory::Monitor,
            2499.0,
            "https://images.unsplash.com/photo-1527443224154-c4a3942d3acf?w=400",
            "27-inch 4K IPS panel".into(),
            None,
        ),
        candidate(
            "4",
            "Ergotron LX Monitor Arm",
            CandidateCategory::Accessories,
            899.0,
            "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=400",
            "Supports VESA standard".into(),
            Some(Requirement::min_depth(ARM_MIN_DEPTH, ARM_TOO_DEEP)),
        ),
        candidate(
            "5",
            "Keychron K8 Pro Mechanical Keyboard",
            CandidateCategory::Peripherals,
            699.0,
            "https://images.unsplash.com/photo-1595225476474-87563907a212?w=400",
            "80% layout, wireless/wired dual mode".into(),
            None,
        ),
        candidate(
            "6",
            "Logitech MX Master 3S Mouse",
            CandidateCategory::Peripherals,
            799.0,
            "https://images.unsplash.com/photo-1527814050087-3793815479db?w=400",
            "8000 DPI sensor".into(),
            None,
        ),
    ]
    .into_iter()
    .map(|product| product.evaluated(config))
    .collect()
}

/// A replacement for an incompatible product.
#[derive(Debug, Clone, PartialEq)]
pub struct Substitute {
    pub name: &'static str,
    pub price: f64,
    pub specs: &'static str,
    /// `None` keeps the replaced product's image.
    pub image_url: Option<&'static str>,
    /// Condition the substitute itself must satisfy.
    pub requirement: Option<Requirement>,
}

impl Substitute {
    #[must_use]
    pub fn fits(&self, config: &Configuration) -> bool {
        self.requirement
            .as_ref()
            .is_none_or(|requirement| requirement.is_met(config))
    }

    /// Overwrite `product` with this substitute and re-evaluate it.
    pub fn apply(&self, product: &mut CandidateProduct, config: &Configuration) {
        product.name = self.name.to_string();
        product.price = self.price;
        product.specs = self.specs.to_string();
        if let Some(image_url) = self.image_url {
            product.image_url = image_url.to_string();
        }
        product.requirement.clone_from(&self.requirement);
        product.evaluate(config);
    }
}

/// Ranked substitutes keyed by why a product failed and what it is.
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    entries: Vec<((FailureReason, CandidateCategory), Vec<Substitute>)>,
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SubstitutionTable {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::empty()
            .with(
                FailureReason::BudgetExceeded,
                CandidateCategory::Chair,
                Substitute {
                    name: "IKEA MARKUS Office Chair",
                    price: 1299.0,
                    specs: "Adjustable height, mesh backrest",
                    image_url: None,
                    requirement: None,
                },
            )
            .with(
                FailureReason::DimensionMismatch,
                CandidateCategory::Accessories,
                Substitute {
                    name: "AmazonBasics Monitor Arm",
                    price: 299.0,
                    specs: "Single arm, suitable for small spaces",
                    image_url: None,
                    requirement: None,
                },
            )
    }

    /// Append a substitute to the end of the ranking for `(reason, category)`.
    #[must_use]
    pub fn with(
        mut self,
        reason: FailureReason,
        category: CandidateCategory,
        substitute: Substitute,
    ) -> Self {
        let key = (reason, category);
        if let Some((_, ranked)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            ranked.push(substitute);
        } else {
            self.entries.push((key, vec![substitute]));
        }
        self
    }

    /// All substitutes for `(reason, category)`, best first.
    #[must_use]
    pub fn ranked(&self, reason: FailureReason, category: CandidateCategory) -> &[Substitute] {
        self.entries
            .iter()
            .find(|(key, _)| *key == (reason, category))
            .map_or(&[], |(_, ranked)| ranked.as_slice())
    }

    /// First substitute that fits `config`.
    #[must_use]
    pub fn pick(
        &self,
        reason: FailureReason,
        category: CandidateCategory,
        config: &Configuration,
    ) -> Option<&Substitute> {
        self.ranked(reason, category)
            .iter()
            .find(|substitute| substitute.fits(config))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn desk_specs_echo_dimensions() {
        let products = generate_candidates(&Configuration {
            space_width: 140.0,
            space_depth: 70.5,
            ..Configuration::default()
        });
        assert_eq!(products[0].specs, "140cm × 70.5cm");
    }

    #[test]
    fn builtin_table_covers_chair_and_arm() {
        let table = SubstitutionTable::builtin();
        let config = Configuration::default();
        let chair = table
            .pick(FailureReason::BudgetExceeded, CandidateCategory::Chair, &config)
            .unwrap();
        assert_eq!(chair.price, 1299.0);
        assert!(
            table
                .pick(FailureReason::BudgetExceeded, CandidateCategory::Monitor, &config)
                .is_none()
        );
    }

    #[test]
    fn pick_skips_substitutes_that_do_not_fit() {
        let table = SubstitutionTable::empty()
            .with(
                FailureReason::BudgetExceeded,
                CandidateCategory::Chair,
                Substitute {
                    name: "Mid-range chair",
                    price: 3999.0,
                    specs: "",
                    image_url: None,
                    requirement: Some(Requirement::min_budget(4000.0, "still too expensive")),
                },
            )
            .with(
                FailureReason::BudgetExceeded,
                CandidateCategory::Chair,
                Substitute {
                    name: "Stool",
                    price: 199.0,
                    specs: "",
                    image_url: None,
                    requirement: None,
                },
            );
        let tight = Configuration {
            budget: 3000.0,
            ..Configuration::default()
        };
        let roomy = Configuration {
            budget: 4500.0,
            ..Configuration::default()
        };
        let pick = |config: &Configuration| {
            table
                .pick(FailureReason::BudgetExceeded, CandidateCategory::Chair, config)
                .map(|s| s.name)
        };
        assert_eq!(pick(&tight), Some("Stool"));
        assert_eq!(pick(&roomy), Some("Mid-range chair"));
    }
}
