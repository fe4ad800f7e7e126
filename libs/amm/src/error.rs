use thiserror::Error;
use types::ValidationError;

/// Errors from pool arithmetic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmmError {
    #[error("Denominator must be non-zero")]
    ZeroDenominator,

    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },

    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
