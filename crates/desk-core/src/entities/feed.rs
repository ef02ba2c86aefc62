use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Template;

/// One page of the cursor-paginated discovery feed (`GET /feed/`).
///
/// `next_cursor` is the id of the last template on this page; pass it back to
/// fetch older templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeedPage {
    pub data: Vec<Template>,
    #[serde(default)]
    pub next_cursor: Option<i64>,
    #[serde(default)]
    pub has_more: bool,
}
