//! Error types for the payout engine

use thiserror::Error;

/// Result type for payout engine operations
pub type Result<T> = std::result::Result<T, PayoutError>;

/// Errors that can occur in the payout engine. Allocation itself is
/// fail-soft and never errors; these cover config loading only.
#[derive(Error, Debug)]
pub enum PayoutError {
    #[error("Failed to read payout config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse payout config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid payout curve: {0}")]
    InvalidCurve(String),
}
