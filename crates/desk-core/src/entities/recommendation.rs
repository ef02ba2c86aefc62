use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Configuration, Product};

/// Body of `POST /configurator/recommendations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecommendationRequest {
    pub space_width: f64,
    pub budget: f64,
    /// Style tag, e.g. `"minimal"`.
    pub style: String,
}

impl From<&Configuration> for RecommendationRequest {
    fn from(config: &Configuration) -> Self {
        Self {
            space_width: config.space_width,
            budget: config.budget,
            style: config.style.as_str().to_string(),
        }
    }
}

/// Catalog products the backend picked for a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    pub total_price: f64,
    #[serde(default)]
    pub products: Vec<Product>,
    /// Human-readable problems (no fitting desk, over budget).
    #[serde(default)]
    pub compatibility_issues: Vec<String>,
    #[serde(default)]
    pub ai_message: String,
}

impl Recommendation {
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.compatibility_issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::enums::Style;

    #[test]
    fn request_carries_width_budget_and_style() {
        let config = Configuration {
            space_width: 140.0,
            budget: 9000.0,
            style: Style::Scandinavian,
            ..Configuration::default()
        };
        let body = serde_json::to_value(RecommendationRequest::from(&config)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"space_width": 140.0, "budget": 9000.0, "style": "scandinavian"})
        );
    }

    #[test]
    fn empty_recommendation_parses() {
        let rec: Recommendation = serde_json::from_str(r#"{"total_price": 0.0}"#).unwrap();
        assert!(rec.products.is_empty());
        assert!(!rec.has_issues());
    }
}
