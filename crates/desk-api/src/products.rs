//! `/products` endpoints.

use desk_auth::Session;
use desk_core::entities::{Product, ProductCreate, ProductUpdate};

use crate::{
    DeskHubClient,
    error::ApiError,
    http::{check_response, json},
    with_query,
};

/// Filters for `GET /products/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub category_id: Option<i64>,
    /// Free-text name search.
    pub q: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl ProductQuery {
    fn path(&self) -> String {
        with_query(
            "/products/",
            &[
                ("limit", Some(self.limit.to_string())),
                ("offset", Some(self.offset.to_string())),
                ("category_id", self.category_id.map(|id| id.to_string())),
                ("q", self.q.clone().filter(|q| !q.trim().is_empty())),
            ],
        )
    }
}

impl DeskHubClient {
    /// Browse the product catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be parsed.
    pub async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
        let resp = check_response(self.get(&query.path()).send().await?).await?;
        json(resp).await
    }

    /// Fetch a product with its category and affiliate links.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        let resp = check_response(self.get(&format!("/products/{id}")).send().await?).await?;
        json(resp).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] if the session is rejected.
    pub async fn create_product(
        &self,
        session: &Session,
        product: &ProductCreate,
    ) -> Result<Product, ApiError> {
        let resp = check_response(
            self.authed(reqwest::Method::POST, "/products/", session)
                .json(product)
                .send()
                .await?,
        )
        .await?;
        json(resp).await
    }

    /// Partial update; only the fields set in `changes` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the product is missing or the session is rejected.
    pub async fn update_product(
        &self,
        session: &Session,
        id: i64,
        changes: &ProductUpdate,
    ) -> Result<Product, ApiError> {
        let resp = check_response(
            self.authed(reqwest::Method::PUT, &format!("/products/{id}"), session)
                .json(changes)
                .send()
                .await?,
        )
        .await?;
        json(resp).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"[
        {
            "id": 1,
            "name": "Aeron Chair",
            "brand": "Herman Miller",
            "price": 8999.0,
            "currency": "CNY",
            "image_url": "https://cdn.deskhub.example/aeron.jpg",
            "specs": {"material": "mesh"},
            "category": {"id": 2, "name": "Chair"},
            "affiliate_links": [
                {"id": 5, "platform": "jd", "url": "https://item.jd.com/1.html", "commission_pct": 4.0}
            ]
        },
        {
            "id": 2,
            "name": "Desk Mat",
            "price": 99.0
        }
    ]"#;

    #[test]
    fn parse_product_list() {
        let data: Vec<Product> = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].affiliate_links[0].platform, "jd");
        assert_eq!(data[0].category.as_ref().map(|c| c.id), Some(2));
        assert_eq!(data[1].currency, "CNY");
        assert!(data[1].brand.is_none());
    }

    #[test]
    fn query_path_includes_filters() {
        let query = ProductQuery {
            category_id: Some(3),
            q: Some("arm".into()),
            limit: 10,
            offset: 20,
        };
        assert_eq!(query.path(), "/products/?limit=10&offset=20&category_id=3&q=arm");
    }

    #[test]
    fn blank_search_is_dropped() {
        let query = ProductQuery {
            q: Some("  ".into()),
            limit: 20,
            ..ProductQuery::default()
        };
        assert_eq!(query.path(), "/products/?limit=20&offset=0");
    }

    #[test]
    fn update_body_only_has_changed_fields() {
        let changes = ProductUpdate {
            price: Some(7999.0),
            ..ProductUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(&changes).unwrap(),
            serde_json::json!({"price": 7999.0})
        );
    }
}
