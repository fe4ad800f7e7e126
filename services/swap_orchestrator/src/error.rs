//! Orchestrator error taxonomy

use crate::chain::ChainError;
use dex::{AbiError, DexError};
use ethers::types::{Address, U256};
use swap_amm::AmmError;
use thiserror::Error;
use types::ValidationError;

/// Every failure a swap or withdrawal can surface
#[derive(Debug, Error)]
pub enum SwapError {
    #[error("Quote unavailable for {token_in:?} -> {token_out:?}: {reason}")]
    QuoteUnavailable {
        token_in: Address,
        token_out: Address,
        reason: String,
    },

    #[error("Pool state unavailable for {pool:?}: {reason}")]
    PoolStateUnavailable { pool: Address, reason: String },

    #[error("Token metadata unavailable for {token:?}: {reason}")]
    TokenUnavailable { token: Address, reason: String },

    #[error("Position {token_id} unavailable: {reason}")]
    PositionUnavailable { token_id: U256, reason: String },

    #[error("Quoted output {quoted} is below the minimum {minimum}")]
    InsufficientOutput { quoted: U256, minimum: U256 },

    #[error("Quoted input {quoted} exceeds the maximum {maximum}")]
    InsufficientInput { quoted: U256, maximum: U256 },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Approval of {token:?} failed: {reason}")]
    ApprovalFailed { token: Address, reason: String },

    #[error("Transaction submission failed: {0}")]
    SubmissionFailed(#[source] ChainError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] AmmError),

    #[error("Encoding error: {0}")]
    Encoding(#[from] DexError),

    #[error("System clock error: {0}")]
    Clock(String),
}

impl From<AbiError> for SwapError {
    fn from(err: AbiError) -> Self {
        SwapError::Encoding(DexError::Abi(err))
    }
}
