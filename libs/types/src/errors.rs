//! Validation errors raised by the value-type constructors

use ethers_core::types::U256;
use thiserror::Error;

/// Errors that can occur while constructing a value type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An address field was the zero address
    #[error("{field} cannot be the zero address")]
    ZeroAddress { field: &'static str },

    /// A pool was requested between a token and itself
    #[error("Pool tokens must differ")]
    IdenticalTokens,

    /// Tokens of a pool live on different chains
    #[error("Tokens on different chains: {left} vs {right}")]
    ChainMismatch { left: u64, right: u64 },

    /// Fee outside the uint24 hundredths-of-a-bip domain the protocol accepts
    #[error("Fee {0} is outside the valid range [0, 1000000)")]
    FeeOutOfRange(u32),

    /// Tick outside [MIN_TICK, MAX_TICK]
    #[error("Tick {0} is outside the valid tick range")]
    TickOutOfRange(i32),

    /// Square-root price outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO]
    #[error("sqrtPriceX96 {0} is outside the valid price range")]
    SqrtPriceOutOfRange(U256),

    /// A route needs at least one pool
    #[error("Route must contain at least one pool")]
    EmptyRoute,

    /// Route endpoints do not connect through its pools
    #[error("Route does not connect {from} to {to}")]
    RouteMismatch { from: String, to: String },

    /// Withdrawal share larger than the whole position
    #[error("Removal share {share} exceeds denominator {denominator}")]
    ShareOutOfRange { share: u32, denominator: u32 },
}
