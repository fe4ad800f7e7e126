//! # Liquidity Withdrawal - Partial Position Removal
//!
//! ## Purpose
//!
//! Computes and encodes the withdrawal of a share of a liquidity position.
//! The share is expressed against the configured denominator (basis points by
//! default) and converted to liquidity units by dividing first and
//! multiplying second, matching the integer math the position manager uses.
//!
//! ## Integration Points
//!
//! - **Position manager**: `positions(tokenId)` read through [`ChainClient`]
//! - **`dex` crate**: `multicall(decreaseLiquidity, collect)` call data
//!
//! ## Architecture Role
//!
//! ```text
//! token id + share ──→ [Read position] ──→ [compute_removal] ──→ [Encode multicall]
//!                           ↓                    ↓                     ↓
//!                     PositionRecord     Removal + Collect     TransactionDescriptor
//! ```
//!
//! Minimum token amounts on `decreaseLiquidity` are zero: the withdrawal
//! accepts whatever the current price yields.

use crate::chain::ChainClient;
use crate::deadline::deadline_after;
use crate::error::SwapError;
use crate::{log_search, log_withdrawal};
use dex::abi::uniswap_v3;
use dex::remove_call_parameters;
use ethers::types::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use swap_amm::liquidity_to_remove;
use swap_config::OrchestratorConfig;
use types::{
    CollectParameters, PositionRecord, RemovalParameters, TransactionDescriptor, ValidationError,
};

/// Position, recipient and deadline a removal applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalTarget {
    pub token_id: U256,
    pub recipient: Address,
    /// Unix timestamp after which the position manager reverts
    pub deadline: u64,
}

/// Decrease-liquidity and collect parameters for removing
/// `remove_share / denominator` of `position_liquidity`
pub fn compute_removal(
    position_liquidity: u128,
    remove_share: u32,
    denominator: u32,
    target: &RemovalTarget,
) -> Result<(RemovalParameters, CollectParameters), SwapError> {
    let liquidity = liquidity_to_remove(position_liquidity, remove_share, denominator)?;

    let removal = RemovalParameters {
        token_id: target.token_id,
        liquidity,
        amount0_min: U256::zero(),
        amount1_min: U256::zero(),
        deadline: target.deadline,
    };
    let collect = CollectParameters::collect_all(target.token_id, target.recipient);

    Ok((removal, collect))
}

/// Encoded withdrawal ready to sign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalPlan {
    pub position: PositionRecord,
    pub removal: RemovalParameters,
    pub collect: CollectParameters,
    pub transaction: TransactionDescriptor,
}

pub struct WithdrawalPlanner {
    client: Arc<dyn ChainClient>,
    config: Arc<OrchestratorConfig>,
}

impl WithdrawalPlanner {
    pub fn new(client: Arc<dyn ChainClient>, config: Arc<OrchestratorConfig>) -> Self {
        Self { client, config }
    }

    /// Snapshot of `token_id` from the position manager
    pub async fn read_position(&self, token_id: U256) -> Result<PositionRecord, SwapError> {
        let unavailable = |reason: String| SwapError::PositionUnavailable { token_id, reason };

        log_search!("Reading position {}", token_id);
        let raw = self
            .client
            .call(
                self.config.protocol.position_manager,
                Bytes::from(uniswap_v3::encode_positions(token_id)?),
            )
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        uniswap_v3::decode_positions(token_id, &raw).map_err(|e| unavailable(e.to_string()))
    }

    /// Read the position and encode the removal of `remove_share` of it
    pub async fn prepare_withdrawal(
        &self,
        token_id: U256,
        remove_share: u32,
        recipient: Option<Address>,
    ) -> Result<WithdrawalPlan, SwapError> {
        let denominator = self.config.policy.liquidity_denominator;
        if remove_share > denominator {
            return Err(ValidationError::ShareOutOfRange {
                share: remove_share,
                denominator,
            }
            .into());
        }

        let recipient = recipient
            .or_else(|| self.client.signer_address())
            .or(self.config.network.wallet_address)
            .ok_or_else(|| {
                SwapError::Configuration(
                    "no recipient (pass one or set PRIVATE_KEY / WALLET_ADDRESS)".to_string(),
                )
            })?;

        let position = self.read_position(token_id).await?;

        let target = RemovalTarget {
            token_id,
            recipient,
            deadline: deadline_after(self.config.policy.deadline_secs)?,
        };
        let (removal, collect) =
            compute_removal(position.liquidity, remove_share, denominator, &target)?;

        let parameters = remove_call_parameters(&removal, &collect)?;
        let transaction = TransactionDescriptor::new(
            self.config.protocol.position_manager,
            parameters.calldata,
            parameters.value,
            self.config.policy.gas_fee_bounds(),
        );

        log_withdrawal!(
            "Prepared removal of {} / {} liquidity from position {} ({}/{})",
            removal.liquidity,
            position.liquidity,
            token_id,
            remove_share,
            denominator
        );

        Ok(WithdrawalPlan {
            position,
            removal,
            collect,
            transaction,
        })
    }
}
