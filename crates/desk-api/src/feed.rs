//! `/feed` endpoint: cursor-paginated template discovery.

use desk_core::entities::FeedPage;

use crate::{
    DeskHubClient,
    error::ApiError,
    http::{check_response, json},
    with_query,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    /// `next_cursor` of the previous page.
    pub cursor: Option<i64>,
    /// Restrict to one style tag.
    pub style: Option<String>,
    pub limit: u32,
}

impl FeedQuery {
    fn path(&self) -> String {
        with_query(
            "/feed/",
            &[
                ("limit", Some(self.limit.to_string())),
                ("cursor", self.cursor.map(|c| c.to_string())),
                ("style", self.style.clone()),
            ],
        )
    }
}

impl DeskHubClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be parsed.
    pub async fn feed(&self, query: &FeedQuery) -> Result<FeedPage, ApiError> {
        let resp = check_response(self.get(&query.path()).send().await?).await?;
        json(resp).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_last_page() {
        let page: FeedPage =
            serde_json::from_str(r#"{"data": [], "next_cursor": null, "has_more": false}"#)
                .unwrap();
        assert!(page.data.is_empty());
        assert!(page.next_cursor.is_none());
        assert!(!page.has_more);
    }

    #[test]
    fn path_carries_cursor_and_style() {
        let query = FeedQuery {
            cursor: Some(41),
            style: Some("minimal".into()),
            limit: 20,
        };
        assert_eq!(query.path(), "/feed/?limit=20&cursor=41&style=minimal");
    }
}
