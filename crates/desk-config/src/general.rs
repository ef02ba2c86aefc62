//! `[general]` section: settings shared by every command.

use serde::{Deserialize, Serialize};

const fn default_page_size() -> u32 {
    20
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Page size of `template list`, `product list` and `feed` when `--limit` is absent.
    #[serde(default = "default_page_size")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_page_size(),
        }
    }
}
