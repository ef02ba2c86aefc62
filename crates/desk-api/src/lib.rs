//! # desk-api
//!
//! Typed async client for the DeskHub REST backend.
//!
//! Endpoints are grouped by resource:
//! - `/auth` (register, login, me)
//! - `/configurator` (backend recommendations, also usable as a [`desk_configurator::Planner`])
//! - `/templates`
//! - `/products`
//! - `/feed`
//! - `/track`
//!
//! Authenticated calls take an explicit [`desk_auth::Session`]; the client
//! never reads stored credentials itself.

pub mod auth;
pub mod configurator;
pub mod cover;
pub mod feed;
pub mod products;
pub mod templates;
pub mod tracking;

mod error;
mod http;

pub use configurator::BackendPlanner;
pub use error::ApiError;
pub use feed::FeedQuery;
pub use products::ProductQuery;

use desk_auth::Session;
use desk_config::ApiConfig;

/// HTTP client bound to one DeskHub backend.
#[derive(Debug, Clone)]
pub struct DeskHubClient {
    http: reqwest::Client,
    base_url: String,
}

impl DeskHubClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] for a non-http(s) base URL and
    /// [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        if !config.is_configured() {
            return Err(ApiError::InvalidBaseUrl(config.base_url.clone()));
        }
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path (path starts with `/`).
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.url(path))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.post(self.url(path))
    }

    fn authed(
        &self,
        method: reqwest::Method,
        path: &str,
        session: &Session,
    ) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(reqwest::header::AUTHORIZATION, session.authorization())
    }
}

/// Append `key=value` pairs to a path as a query string, skipping `None`s.
fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| format!("{key}={}", urlencoding::encode(v)))
        })
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", query.join("&"))
    }
}
