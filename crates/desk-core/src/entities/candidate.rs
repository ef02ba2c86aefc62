use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Configuration;
use crate::enums::{CandidateCategory, FailureReason};

/// Which configuration value a requirement is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    /// `config.budget` must be at least the threshold.
    MinBudget,
    /// `config.space_depth` must be at least the threshold.
    MinDepth,
}

impl RequirementKind {
    #[must_use]
    pub const fn reason(self) -> FailureReason {
        match self {
            Self::MinBudget => FailureReason::BudgetExceeded,
            Self::MinDepth => FailureReason::DimensionMismatch,
        }
    }
}

/// A threshold a configuration must meet for a product to be compatible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Requirement {
    pub kind: RequirementKind,
    pub threshold: f64,
    /// Message shown when the requirement is not met.
    pub issue: String,
}

impl Requirement {
    #[must_use]
    pub fn min_budget(threshold: f64, issue: impl Into<String>) -> Self {
        Self {
            kind: RequirementKind::MinBudget,
            threshold,
            issue: issue.into(),
        }
    }

    #[must_use]
    pub fn min_depth(threshold: f64, issue: impl Into<String>) -> Self {
        Self {
            kind: RequirementKind::MinDepth,
            threshold,
            issue: issue.into(),
        }
    }

    #[must_use]
    pub fn is_met(&self, config: &Configuration) -> bool {
        let measured = match self.kind {
            RequirementKind::MinBudget => config.budget,
            RequirementKind::MinDepth => config.space_depth,
        };
        measured >= self.threshold
    }

    #[must_use]
    pub const fn reason(&self) -> FailureReason {
        self.kind.reason()
    }
}

/// A recommended product evaluated against a configuration.
///
/// `compatible` and `issue` are derived from `requirement`; call
/// [`CandidateProduct::evaluate`] after any field change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CandidateProduct {
    pub id: String,
    pub name: String,
    pub category: CandidateCategory,
    pub price: f64,
    pub image_url: String,
    pub specs: String,
    pub compatible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<Requirement>,
}

impl CandidateProduct {
    /// The reason this product fails `config`, if it does.
    #[must_use]
    pub fn failure(&self, config: &Configuration) -> Option<FailureReason> {
        self.requirement
            .as_ref()
            .filter(|requirement| !requirement.is_met(config))
            .map(Requirement::reason)
    }

    /// Recompute `compatible` and `issue` for `config`.
    pub fn evaluate(&mut self, config: &Configuration) {
        let unmet = self
            .requirement
            .as_ref()
            .filter(|requirement| !requirement.is_met(config));
        self.compatible = unmet.is_none();
        self.issue = unmet.map(|requirement| requirement.issue.clone());
    }

    #[must_use]
    pub fn evaluated(mut self, config: &Configuration) -> Self {
        self.evaluate(config);
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chair() -> CandidateProduct {
        CandidateProduct {
            id: "2".into(),
            name: "Chair".into(),
            category: CandidateCategory::Chair,
            price: 8999.0,
            image_url: String::new(),
            specs: String::new(),
            compatible: true,
            issue: None,
            requirement: Some(Requirement::min_budget(8000.0, "too expensive")),
        }
    }

    #[test]
    fn evaluate_marks_unmet_requirement() {
        let config = Configuration {
            budget: 7999.0,
            ..Configuration::default()
        };
        let product = chair().evaluated(&config);
        assert!(!product.compatible);
        assert_eq!(product.issue.as_deref(), Some("too expensive"));
        assert_eq!(product.failure(&config), Some(FailureReason::BudgetExceeded));
    }

    #[test]
    fn evaluate_clears_issue_when_met() {
        let poor = Configuration {
            budget: 100.0,
            ..Configuration::default()
        };
        let rich = Configuration {
            budget: 8000.0,
            ..Configuration::default()
        };
        let mut product = chair().evaluated(&poor);
        product.evaluate(&rich);
        assert!(product.compatible);
        assert!(product.issue.is_none());
        assert_eq!(product.failure(&rich), None);
    }

    #[test]
    fn no_requirement_is_always_compatible() {
        let mut product = chair();
        product.requirement = None;
        let config = Configuration {
            budget: 0.0,
            space_depth: 0.0,
            ..Configuration::default()
        };
        assert!(product.evaluated(&config).compatible);
    }

    #[test]
    fn depth_requirement_measures_space_depth() {
        let requirement = Requirement::min_depth(50.0, "too shallow");
        let shallow = Configuration {
            space_depth: 49.0,
            ..Configuration::default()
        };
        assert!(!requirement.is_met(&shallow));
        assert_eq!(requirement.reason(), FailureReason::DimensionMismatch);
    }
}
