//! # Swap AMM Library - Exact Integer Pool Mathematics
//!
//! ## Purpose
//!
//! Pure, network-free arithmetic for concentrated-liquidity pools: CREATE2 pool
//! address derivation, slippage bounds, approval buffers and proportional
//! liquidity removal. Every calculation runs in the contract's own integer
//! domain (`U256` amounts, `u128` liquidity) with floor division, so results
//! match what the chain computes bit for bit.
//!
//! ## Integration Points
//!
//! - **Input Sources**: Token pairs and fee tiers from callers, quoted amounts
//!   from the quoter, position liquidity from the position manager
//! - **Output Destinations**: Swap orchestrator (pool addresses, slippage
//!   bounds, approval amounts), withdrawal planner (liquidity to remove)
//! - **Overflow Handling**: Checked arithmetic throughout, surfaced as
//!   [`AmmError::Overflow`]
//!
//! ## Architecture Role
//!
//! ```text
//! (factory, tokenA, tokenB, fee) → [pool_address] → Pool contract address
//! quoted amount + Percent        → [slippage]     → amountOutMinimum / amountInMaximum
//! required input + buffer        → [slippage]     → approval amount (rounded up)
//! liquidity + share              → [liquidity]    → liquidity to decrease (rounded down)
//! ```

pub mod error;
pub mod liquidity;
pub mod percent;
pub mod pool_address;
pub mod slippage;
pub mod units;

pub use error::AmmError;
pub use liquidity::liquidity_to_remove;
pub use percent::Percent;
pub use pool_address::{compute_pool_address, pool_address_for_key, POOL_INIT_CODE_HASH};
pub use slippage::{buffered_approval_amount, maximum_amount_in, minimum_amount_out};
pub use units::{from_readable_amount, to_readable_amount};
