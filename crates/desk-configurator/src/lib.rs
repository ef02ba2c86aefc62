//! # desk-configurator
//!
//! The configurator flow of DeskHub:
//! - [`Wizard`]: space/budget, purpose and style steps, then generation
//! - [`generation`]: cancellable, time-bounded plan generation on a tokio task
//! - [`Review`]: compatibility scoring and table-driven product swaps
//! - [`purchase`]: the score gate and partner store links
//! - [`Cart`]: line items behind a purchase plan total

pub mod cart;
pub mod catalog;
pub mod generation;
pub mod purchase;
pub mod review;
pub mod wizard;

mod error;

pub use cart::Cart;
pub use catalog::{Substitute, SubstitutionTable, generate_candidates};
pub use error::{GenerationError, ReviewError};
pub use generation::{
    CancelHandle, CancelToken, FixedDelayPlanner, GenerationTask, Planner, cancel_pair, generate,
};
pub use purchase::{PurchaseGate, proceed_to_purchase, purchase_links};
pub use review::{Review, SwapOutcome, compute_score, swap_product};
pub use wizard::{Advance, Retreat, Wizard};
