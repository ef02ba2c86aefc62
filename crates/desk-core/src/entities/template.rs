use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Product, User};
use crate::errors::CoreError;

/// A curated desk-setup post with tagged products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Template {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub style: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub clicks: u64,
    /// Backend timestamp, passed through verbatim.
    pub created_at: String,
    #[serde(default)]
    pub items: Vec<TemplateItem>,
    #[serde(default)]
    pub creator: Option<User>,
}

impl Template {
    /// Whether `user_id` authored this template.
    #[must_use]
    pub fn is_created_by(&self, user_id: i64) -> bool {
        self.creator.as_ref().is_some_and(|creator| creator.id == user_id)
    }
}

/// A product tagged on a template's cover image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TemplateItem {
    pub product: Product,
    /// Horizontal position, percent of image width.
    pub position_x: f64,
    /// Vertical position, percent of image height.
    pub position_y: f64,
}

/// Normalized on-image coordinates of a product tag, both axes in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TagPosition {
    x: f64,
    y: f64,
}

impl TagPosition {
    pub const MAX: f64 = 100.0;

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when either axis is not finite or lies
    /// outside `0..=100`.
    pub fn new(x: f64, y: f64) -> Result<Self, CoreError> {
        for (axis, value) in [("x", x), ("y", y)] {
            if !value.is_finite() || !(0.0..=Self::MAX).contains(&value) {
                return Err(CoreError::Validation(format!(
                    "tag position {axis}={value} must be between 0 and 100"
                )));
            }
        }
        Ok(Self { x, y })
    }

    #[must_use]
    pub const fn x(self) -> f64 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> f64 {
        self.y
    }
}

/// Item of a template create/update body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TemplateItemCreate {
    pub product_id: i64,
    pub position_x: f64,
    pub position_y: f64,
}

impl TemplateItemCreate {
    #[must_use]
    pub const fn new(product_id: i64, position: TagPosition) -> Self {
        Self {
            product_id,
            position_x: position.x,
            position_y: position.y,
        }
    }
}

/// Body of `POST /templates/` and `PUT /templates/{id}`.
///
/// Updates replace the whole item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TemplateCreate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub items: Vec<TemplateItemCreate>,
}

impl From<&Template> for TemplateCreate {
    fn from(template: &Template) -> Self {
        Self {
            title: template.title.clone(),
            description: template.description.clone(),
            style: template.style.clone(),
            cover_image_url: template.cover_image_url.clone(),
            items: template
                .items
                .iter()
                .map(|item| TemplateItemCreate {
                    product_id: item.product.id,
                    position_x: item.position_x,
                    position_y: item.position_y,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(100.0, 100.0)]
    #[case(42.5, 7.25)]
    fn accepts_positions_in_range(#[case] x: f64, #[case] y: f64) {
        let position = TagPosition::new(x, y).expect("in range");
        assert!((position.x() - x).abs() < f64::EPSILON);
        assert!((position.y() - y).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(-0.1, 50.0)]
    #[case(50.0, 100.5)]
    #[case(f64::NAN, 10.0)]
    #[case(10.0, f64::INFINITY)]
    fn rejects_positions_out_of_range(#[case] x: f64, #[case] y: f64) {
        let err = TagPosition::new(x, y).expect_err("out of range");
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn item_create_copies_position() {
        let item = TemplateItemCreate::new(7, TagPosition::new(25.0, 75.0).unwrap());
        assert_eq!(item.product_id, 7);
        assert!((item.position_x - 25.0).abs() < f64::EPSILON);
        assert!((item.position_y - 75.0).abs() < f64::EPSILON);
    }
}
