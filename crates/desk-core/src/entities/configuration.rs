use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Purpose, Style};

/// Desk space, budget and preferences collected by the configurator wizard.
///
/// Handed to the reviewer by value once generation completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Configuration {
    /// Usable desk width in centimetres.
    pub space_width: f64,
    /// Usable desk depth in centimetres.
    pub space_depth: f64,
    /// Total budget in currency units.
    pub budget: f64,
    pub purpose: Purpose,
    pub style: Style,
}

impl Configuration {
    pub const DEFAULT_WIDTH: f64 = 120.0;
    pub const DEFAULT_DEPTH: f64 = 60.0;
    pub const DEFAULT_BUDGET: f64 = 5000.0;
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            space_width: Self::DEFAULT_WIDTH,
            space_depth: Self::DEFAULT_DEPTH,
            budget: Self::DEFAULT_BUDGET,
            purpose: Purpose::default(),
            style: Style::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_configuration_values() {
        let config = Configuration::default();
        assert_eq!(config.space_width, 120.0);
        assert_eq!(config.space_depth, 60.0);
        assert_eq!(config.budget, 5000.0);
        assert_eq!(config.purpose, Purpose::Balanced);
        assert_eq!(config.style, Style::Modern);
    }
}
