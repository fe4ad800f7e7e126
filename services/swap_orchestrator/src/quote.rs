//! Quote resolution against the on-chain quoter
//!
//! The V1 quoter computes its result by simulating the swap and reverting, so
//! quotes are only ever issued through `eth_call`. No price limit is applied
//! and failures are not retried.

use crate::chain::ChainClient;
use crate::error::SwapError;
use crate::log_search;
use dex::abi::uniswap_v3;
use ethers::types::{Address, Bytes, U256};
use std::sync::Arc;
use types::{FeeTier, Token};

/// Which side of the trade `amount` fixes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteDirection {
    /// `amount` is the input; the quote is the expected output
    Forward,
    /// `amount` is the desired output; the quote is the required input
    Reverse,
}

#[derive(Clone)]
pub struct QuoteResolver {
    client: Arc<dyn ChainClient>,
    quoter: Address,
}

impl QuoteResolver {
    pub fn new(client: Arc<dyn ChainClient>, quoter: Address) -> Self {
        Self { client, quoter }
    }

    pub async fn quote(
        &self,
        token_in: &Token,
        token_out: &Token,
        fee: FeeTier,
        amount: U256,
        direction: QuoteDirection,
    ) -> Result<U256, SwapError> {
        let unavailable = |reason: String| SwapError::QuoteUnavailable {
            token_in: token_in.address(),
            token_out: token_out.address(),
            reason,
        };

        let calldata = uniswap_v3::encode_quote_single(
            token_in.address(),
            token_out.address(),
            fee,
            amount,
            direction == QuoteDirection::Forward,
        )?;

        let raw = self
            .client
            .call(self.quoter, Bytes::from(calldata))
            .await
            .map_err(|e| unavailable(e.to_string()))?;
        let quoted = uniswap_v3::decode_quote(&raw).map_err(|e| unavailable(e.to_string()))?;

        log_search!(
            "Quote {:?} {} {} -> {} {}: {}",
            direction,
            amount,
            token_in.symbol(),
            token_out.symbol(),
            fee,
            quoted
        );
        Ok(quoted)
    }
}
