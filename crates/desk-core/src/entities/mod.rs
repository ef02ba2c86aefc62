//! Entity structs for DeskHub domain objects and backend payloads.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Wire DTOs
//! mirror the JSON shapes of the DeskHub REST backend field-for-field.

mod candidate;
mod cart;
mod configuration;
mod feed;
mod product;
mod recommendation;
mod template;
mod tracking;
mod user;

pub use candidate::{CandidateProduct, Requirement, RequirementKind};
pub use cart::CartItem;
pub use configuration::Configuration;
pub use feed::FeedPage;
pub use product::{AffiliateLink, Category, Product, ProductCreate, ProductUpdate};
pub use recommendation::{Recommendation, RecommendationRequest};
pub use template::{TagPosition, Template, TemplateCreate, TemplateItem, TemplateItemCreate};
pub use tracking::{TrackClick, TrackStatus, TrackView, TrackViewResponse};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User};
