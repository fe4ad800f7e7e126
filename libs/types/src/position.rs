//! Liquidity position snapshots and withdrawal parameters

use crate::pool::FeeTier;
use ethers_core::types::{Address, U256};
use serde::{Deserialize, Serialize};

/// Largest uint128, used as "collect everything owed"
pub const MAX_UINT128: u128 = u128::MAX;

/// Snapshot of a position read from the position manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub token_id: U256,
    pub liquidity: u128,
    pub token0: Address,
    pub token1: Address,
    pub fee: FeeTier,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

/// Arguments of `decreaseLiquidity`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalParameters {
    pub token_id: U256,
    pub liquidity: u128,
    pub amount0_min: U256,
    pub amount1_min: U256,
    /// Unix timestamp after which the call reverts
    pub deadline: u64,
}

/// Arguments of `collect`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectParameters {
    pub token_id: U256,
    pub recipient: Address,
    pub amount0_max: u128,
    pub amount1_max: u128,
}

impl CollectParameters {
    /// Collect every token owed to the position
    pub fn collect_all(token_id: U256, recipient: Address) -> Self {
        Self {
            token_id,
            recipient,
            amount0_max: MAX_UINT128,
            amount1_max: MAX_UINT128,
        }
    }
}
