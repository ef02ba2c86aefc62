use std::time::Duration;

use thiserror::Error;

/// Outcome of a generation run that did not produce a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("generation cancelled")]
    Cancelled,

    #[error("generation timed out after {}ms", .after.as_millis())]
    TimedOut { after: Duration },

    #[error("generation failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("purchase blocked: compatibility score {score} is below the required {required}")]
    PurchaseBlocked { score: u8, required: u8 },
}
