//! ERC-20 metadata and balance reads

use crate::chain::ChainClient;
use crate::error::SwapError;
use crate::log_search;
use dex::abi::erc20;
use ethers::types::{Address, Bytes, U256};
use std::sync::Arc;
use types::Token;

/// Builds [`Token`]s for the connected chain from on-chain metadata
#[derive(Clone)]
pub struct TokenResolver {
    client: Arc<dyn ChainClient>,
}

impl TokenResolver {
    pub fn new(client: Arc<dyn ChainClient>) -> Self {
        Self { client }
    }

    /// Read `decimals()` and `symbol()` concurrently
    pub async fn resolve(&self, address: Address) -> Result<Token, SwapError> {
        let unavailable = |reason: String| SwapError::TokenUnavailable {
            token: address,
            reason,
        };

        log_search!("Resolving token metadata for {:?}", address);

        let (decimals, symbol) = tokio::try_join!(
            self.client
                .call(address, Bytes::from(erc20::encode_decimals()?)),
            self.client.call(address, Bytes::from(erc20::encode_symbol()?)),
        )
        .map_err(|e| unavailable(e.to_string()))?;

        let decimals = erc20::decode_decimals(&decimals).map_err(|e| unavailable(e.to_string()))?;
        let symbol = erc20::decode_symbol(&symbol).map_err(|e| unavailable(e.to_string()))?;

        Ok(Token::new(self.client.chain_id(), address, decimals, symbol)?)
    }

    /// Raw balance of `owner` in `token`
    pub async fn balance_of(&self, token: &Token, owner: Address) -> Result<U256, SwapError> {
        let unavailable = |reason: String| SwapError::TokenUnavailable {
            token: token.address(),
            reason,
        };

        let raw = self
            .client
            .call(
                token.address(),
                Bytes::from(erc20::encode_balance_of(owner)?),
            )
            .await
            .map_err(|e| unavailable(e.to_string()))?;
        erc20::decode_balance_of(&raw).map_err(|e| unavailable(e.to_string()))
    }

    /// Resolve both sides of a pair concurrently
    pub async fn resolve_pair(&self, a: Address, b: Address) -> Result<(Token, Token), SwapError> {
        tokio::try_join!(self.resolve(a), self.resolve(b))
    }
}
