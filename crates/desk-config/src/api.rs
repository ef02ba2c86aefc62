//! DeskHub backend connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "deskhub/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend root URL, without trailing slash (e.g., `http://localhost:8000`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. There is no retry on expiry.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Check if a usable base URL is set.
    pub fn is_configured(&self) -> bool {
        self.base_url.starts_with("http://") || self.base_url.starts_with("https://")
    }

    /// Base URL with any trailing slashes removed.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ApiConfig::default();
        assert!(config.is_configured());
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn normalized_base_url_strips_trailing_slash() {
        let config = ApiConfig {
            base_url: "https://api.deskhub.example/".into(),
            ..Default::default()
        };
        assert_eq!(config.normalized_base_url(), "https://api.deskhub.example");
    }

    #[test]
    fn bare_host_is_not_configured() {
        let config = ApiConfig {
            base_url: "localhost:8000".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
