//! # Swap Types Library
//!
//! Immutable value types shared by every crate in the workspace: tokens, fee
//! tiers, pool identities and state, routes, trades, position records and the
//! unsigned transaction descriptors the orchestrator emits.
//!
//! ## Design Philosophy
//!
//! - **Validated at construction**: zero addresses, out-of-range ticks and
//!   fees, empty routes are rejected by the constructors, so downstream code
//!   only ever sees protocol-valid values
//! - **On-chain integer domains**: amounts are `U256`, liquidity is `u128`,
//!   ticks are `i32`, matching the contract ABI exactly
//! - **No network access**: every type here is pure data
//!
//! ## Quick Start
//!
//! ```rust
//! use ethers_core::types::Address;
//! use types::{FeeTier, Token};
//!
//! let usdc: Address = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".parse().unwrap();
//! let token = Token::new(1, usdc, 6, "USDC").unwrap();
//! assert_eq!(token.decimals(), 6);
//! assert_eq!(FeeTier::MEDIUM.pips(), 3000);
//! ```

pub mod errors;
pub mod pool;
pub mod position;
pub mod token;
pub mod trade;
pub mod transaction;

pub use errors::ValidationError;
pub use pool::{
    FeeTier, Pool, PoolKey, PoolState, MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK,
};
pub use position::{CollectParameters, PositionRecord, RemovalParameters, MAX_UINT128};
pub use token::Token;
pub use trade::{Route, Trade, TradeType};
pub use transaction::{GasFeeBounds, TransactionDescriptor};
