//! Pool state reads
//!
//! `fee()`, `liquidity()` and `slot0()` are issued concurrently and the state
//! is assembled only when all three succeed. State is read fresh on every
//! call; nothing is cached between operations.

use crate::chain::ChainClient;
use crate::error::SwapError;
use crate::log_search;
use dex::abi::uniswap_v3;
use ethers::types::{Address, Bytes};
use std::sync::Arc;
use types::{FeeTier, PoolState};

#[derive(Clone)]
pub struct PoolStateReader {
    client: Arc<dyn ChainClient>,
}

impl PoolStateReader {
    pub fn new(client: Arc<dyn ChainClient>) -> Self {
        Self { client }
    }

    pub async fn read_pool_state(&self, pool: Address) -> Result<PoolState, SwapError> {
        let unavailable = |reason: String| SwapError::PoolStateUnavailable { pool, reason };

        log_search!("Reading pool state for {:?}", pool);

        let (fee, liquidity, slot0) = tokio::try_join!(
            self.client.call(pool, Bytes::from(uniswap_v3::encode_fee()?)),
            self.client
                .call(pool, Bytes::from(uniswap_v3::encode_liquidity()?)),
            self.client.call(pool, Bytes::from(uniswap_v3::encode_slot0()?)),
        )
        .map_err(|e| unavailable(e.to_string()))?;

        let fee = uniswap_v3::decode_fee(&fee).map_err(|e| unavailable(e.to_string()))?;
        let liquidity =
            uniswap_v3::decode_liquidity(&liquidity).map_err(|e| unavailable(e.to_string()))?;
        let slot0 = uniswap_v3::decode_slot0(&slot0).map_err(|e| unavailable(e.to_string()))?;

        let fee = FeeTier::new(fee).map_err(|e| unavailable(e.to_string()))?;
        PoolState::new(fee, liquidity, slot0.sqrt_price_x96, slot0.tick)
            .map_err(|e| unavailable(e.to_string()))
    }
}
