use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Body of `POST /track/view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TrackView {
    pub template_id: i64,
}

/// Response of `POST /track/view`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TrackViewResponse {
    pub status: String,
    pub views: u64,
}

/// Body of `POST /track/click`, sent when a purchase link is followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TrackClick {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
    pub product_id: i64,
    pub platform: String,
}

/// Response of `POST /track/click`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TrackStatus {
    pub status: String,
}
