//! Shared DEX protocol encoding library
//!
//! This library provides the contract-facing half of the swap orchestrator:
//! canonical ABIs for the calls it issues and builders that turn validated
//! domain values into call data.
//!
//! # Architecture
//!
//! ```text
//! services/adapters/dex_utils/
//! ├── abi/                 # ABI definitions and call decoders
//! │   ├── erc20.rs         # allowance / approve / decimals / symbol
//! │   └── uniswap_v3.rs    # pool, quoter, swap router, position manager
//! ├── swap_router.rs       # Trade -> exactInputSingle / exactOutputSingle
//! └── position_manager.rs  # withdrawal -> multicall(decreaseLiquidity, collect)
//! ```
//!
//! # Design Principles
//! - Single canonical source for protocol ABIs
//! - Decoded integers are range-checked against their Solidity width
//! - Builders take validated `types` values, never raw tuples

pub mod abi;
pub mod position_manager;
pub mod swap_router;

use ethers_core::types::{Bytes, U256};
use serde::{Deserialize, Serialize};

pub use abi::AbiError;
pub use position_manager::remove_call_parameters;
pub use swap_router::{swap_call_parameters, SwapOptions};

/// Encoded contract call: call data plus native value to attach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodParameters {
    pub calldata: Bytes,
    pub value: U256,
}

/// Errors raised while building protocol calls
#[derive(Debug, thiserror::Error)]
pub enum DexError {
    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error(transparent)]
    Amm(#[from] swap_amm::AmmError),

    #[error("Only single-hop routes are supported, got {hops} pools")]
    UnsupportedRoute { hops: usize },

    #[error("Removal targets position {removal} but collect targets {collect}")]
    PositionMismatch { removal: U256, collect: U256 },
}
