//! Errors shared by the DeskHub domain crates.
//!
//! Crate-specific failures (`ApiError`, `AuthError`, `GenerationError`, ...)
//! live next to the code that raises them and meet in `anyhow` inside
//! `desk-cli`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The wizard (or another state machine) was driven out of order.
    #[error("cannot {action} {entity_type} at {from}")]
    InvalidTransition {
        entity_type: String,
        from: String,
        action: String,
    },

    /// A value fell outside its allowed range or format.
    #[error("invalid value: {0}")]
    Validation(String),
}
