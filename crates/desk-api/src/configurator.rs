//! `/configurator` endpoint and the planner backed by it.

use std::sync::Mutex;

use desk_configurator::{GenerationError, Planner};
use desk_core::entities::{Configuration, Recommendation, RecommendationRequest};

use crate::{
    DeskHubClient,
    error::ApiError,
    http::{check_response, json},
};

impl DeskHubClient {
    /// Ask the backend to pick catalog products for a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be parsed.
    pub async fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendation, ApiError> {
        let resp = check_response(
            self.post("/configurator/recommendations")
                .json(request)
                .send()
                .await?,
        )
        .await?;
        json(resp).await
    }
}

/// Planner that asks the backend for recommendations.
///
/// The configuration itself passes through unchanged; the backend's answer is
/// kept for [`BackendPlanner::take_recommendation`].
#[derive(Debug)]
pub struct BackendPlanner {
    client: DeskHubClient,
    last: Mutex<Option<Recommendation>>,
}

impl BackendPlanner {
    #[must_use]
    pub const fn new(client: DeskHubClient) -> Self {
        Self {
            client,
            last: Mutex::new(None),
        }
    }

    /// The recommendation from the most recent successful plan.
    pub fn take_recommendation(&self) -> Option<Recommendation> {
        self.last.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl Planner for BackendPlanner {
    async fn plan(&self, draft: Configuration) -> Result<Configuration, GenerationError> {
        let request = RecommendationRequest::from(&draft);
        let recommendation = self
            .client
            .recommendations(&request)
            .await
            .map_err(|error| GenerationError::Failed(error.to_string()))?;
        tracing::debug!(
            products = recommendation.products.len(),
            issues = recommendation.compatibility_issues.len(),
            "backend recommendation received"
        );
        if let Ok(mut slot) = self.last.lock() {
            *slot = Some(recommendation);
        }
        Ok(draft)
    }
}
