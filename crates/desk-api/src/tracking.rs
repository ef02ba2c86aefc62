//! `/track` endpoints: view and affiliate click counters.

use desk_core::entities::{TrackClick, TrackStatus, TrackView, TrackViewResponse};

use crate::{
    DeskHubClient,
    error::ApiError,
    http::{check_response, json},
};

impl DeskHubClient {
    /// Count a template view. Returns the new view total.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown template.
    pub async fn track_view(&self, template_id: i64) -> Result<TrackViewResponse, ApiError> {
        let body = TrackView { template_id };
        let resp = check_response(self.post("/track/view").json(&body).send().await?).await?;
        json(resp).await
    }

    /// Record a click on a product's purchase link.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn track_click(&self, click: &TrackClick) -> Result<TrackStatus, ApiError> {
        let resp = check_response(self.post("/track/click").json(click).send().await?).await?;
        json(resp).await
    }
}
