//! Configurator wizard and review settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Simulated planning latency, in milliseconds.
const fn default_generation_delay_ms() -> u64 {
    2500
}

/// Upper bound on plan generation, in milliseconds.
const fn default_generation_timeout_ms() -> u64 {
    30_000
}

/// Score required before purchase links are shown.
const fn default_purchase_min_score() -> u8 {
    100
}

/// Which planner produces the configurator's setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannerKind {
    /// Local fixed-delay generation.
    #[default]
    Fixed,
    /// `POST /configurator/recommendations` on the configured backend.
    Backend,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfiguratorConfig {
    #[serde(default)]
    pub planner: PlannerKind,

    #[serde(default = "default_generation_delay_ms")]
    pub generation_delay_ms: u64,

    #[serde(default = "default_generation_timeout_ms")]
    pub generation_timeout_ms: u64,

    /// Minimum compatibility score (`0..=100`) for `proceed to purchase`.
    #[serde(default = "default_purchase_min_score")]
    pub purchase_min_score: u8,
}

impl Default for ConfiguratorConfig {
    fn default() -> Self {
        Self {
            planner: PlannerKind::default(),
            generation_delay_ms: default_generation_delay_ms(),
            generation_timeout_ms: default_generation_timeout_ms(),
            purchase_min_score: default_purchase_min_score(),
        }
    }
}

impl ConfiguratorConfig {
    pub const fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    pub const fn generation_timeout(&self) -> Duration {
        Duration::from_millis(self.generation_timeout_ms)
    }
}
