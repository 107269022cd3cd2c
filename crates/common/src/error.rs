//! Error types

use thiserror::Error;

/// Main error type for the EcoImpact core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or out-of-range input. Rejected before any state is touched.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A ledger delta with a negative increment.
    #[error("Invalid delta: {0}")]
    InvalidDelta(String),

    /// The campaign is no longer accepting joins or leaves.
    #[error("Campaign closed: {0}")]
    CampaignClosed(String),

    /// Joining would push the campaign past its target quantity.
    #[error("Campaign full: requested {requested} more, only {headroom} left")]
    CapacityExceeded { requested: u32, headroom: u32 },

    /// Per-entity lock acquisition exhausted its retries.
    /// Expected to clear quickly; callers should retry.
    #[error("Operation contended, try again")]
    Contended,

    /// Not enough monthly samples to project from.
    #[error("Not enough history: {got} samples, need at least {need}")]
    InsufficientHistory { got: usize, need: usize },

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
