//! Backend payloads captured from a local DeskHub server.

use desk_core::entities::{FeedPage, Product, Template};
use pretty_assertions::assert_eq;

const FEED_PAGE: &str = r#"{
    "data": [
        {
            "id": 12,
            "title": "Scandi corner",
            "description": null,
            "style": "scandinavian",
            "cover_image_url": "data:image/png;base64,AAEC",
            "views": 0,
            "clicks": 0,
            "created_at": "2025-05-20T08:30:00.123456",
            "creator": {"id": 1, "email": "a@deskhub.example", "username": "anna", "avatar_url": "https://cdn.deskhub.example/a.png"},
            "items": []
        }
    ],
    "next_cursor": 12,
    "has_more": true
}"#;

const PRODUCT: &str = r#"{
    "id": 8,
    "name": "Monitor Arm",
    "brand": null,
    "price": 899.0,
    "currency": "CNY",
    "image_url": null,
    "specs": null,
    "category": null,
    "affiliate_links": [
        {"id": 1, "platform": "amazon", "url": "https://amazon.example/arm", "commission_pct": 5.0},
        {"id": 2, "platform": "taobao", "url": "https://taobao.example/arm", "commission_pct": 3.5}
    ]
}"#;

#[test]
fn feed_page_has_cursor_for_next_request() {
    let page: FeedPage = serde_json::from_str(FEED_PAGE).unwrap();
    assert!(page.has_more);
    assert_eq!(page.next_cursor, Some(12));
    let template: &Template = &page.data[0];
    assert_eq!(template.style, "scandinavian");
    assert!(template.cover_image_url.as_deref().unwrap().starts_with("data:image/png"));
}

#[test]
fn product_with_null_optionals_parses() {
    let product: Product = serde_json::from_str(PRODUCT).unwrap();
    assert!(product.brand.is_none());
    assert!(product.specs.is_none());
    assert_eq!(product.affiliate_links.len(), 2);
}
