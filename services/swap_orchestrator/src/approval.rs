//! # Approval Manager - ERC-20 Allowance Enforcement
//!
//! ## Purpose
//!
//! Guarantees the swap router may pull the input token before a swap is
//! encoded. The current allowance is read first; an `approve` transaction is
//! submitted only when it falls short, and the manager waits for its receipt
//! before returning.
//!
//! ## Invariants
//!
//! - A sufficient allowance is never touched, so repeated calls are no-ops
//! - Approvals are issued for exactly the requested amount, never less
//! - A read-only client fails with a configuration error before anything is
//!   submitted

use crate::chain::{ChainClient, ChainError};
use crate::error::SwapError;
use crate::log_approval;
use dex::abi::erc20;
use ethers::types::{Address, Bytes, H256, U256};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use types::{GasFeeBounds, Token, TransactionDescriptor};

/// Result of [`ApprovalManager::ensure_approval`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApprovalOutcome {
    /// The existing allowance already covered the requirement
    AlreadySufficient { allowance: U256 },
    /// An approval was mined
    Approved { tx_hash: H256, amount: U256 },
}

#[derive(Clone)]
pub struct ApprovalManager {
    client: Arc<dyn ChainClient>,
    gas: GasFeeBounds,
}

impl ApprovalManager {
    pub fn new(client: Arc<dyn ChainClient>, gas: GasFeeBounds) -> Self {
        Self { client, gas }
    }

    /// Current allowance granted by `owner` to `spender`
    pub async fn allowance(
        &self,
        token: &Token,
        owner: Address,
        spender: Address,
    ) -> Result<U256, SwapError> {
        let failed = |reason: String| SwapError::ApprovalFailed {
            token: token.address(),
            reason,
        };

        let raw = self
            .client
            .call(
                token.address(),
                Bytes::from(erc20::encode_allowance(owner, spender)?),
            )
            .await
            .map_err(|e| failed(format!("allowance read failed: {}", e)))?;
        erc20::decode_allowance(&raw).map_err(|e| failed(e.to_string()))
    }

    /// Make sure `spender` may transfer `required` of `token` from `owner`
    pub async fn ensure_approval(
        &self,
        token: &Token,
        owner: Address,
        spender: Address,
        required: U256,
    ) -> Result<ApprovalOutcome, SwapError> {
        let allowance = self.allowance(token, owner, spender).await?;
        if allowance >= required {
            log_approval!(
                "{} allowance {} already covers {}",
                token.symbol(),
                allowance,
                required
            );
            return Ok(ApprovalOutcome::AlreadySufficient { allowance });
        }

        let signer = self
            .client
            .signer_address()
            .ok_or_else(|| SwapError::Configuration(ChainError::MissingSigner.to_string()))?;
        if signer != owner {
            return Err(SwapError::Configuration(format!(
                "signer {:?} cannot approve on behalf of owner {:?}",
                signer, owner
            )));
        }

        log_approval!(
            "Approving {} {} for spender {:?} (allowance {})",
            required,
            token.symbol(),
            spender,
            allowance
        );

        let tx = TransactionDescriptor::new(
            token.address(),
            Bytes::from(erc20::encode_approve(spender, required)?),
            U256::zero(),
            self.gas,
        );
        let tx_hash = self
            .client
            .send_transaction(&tx)
            .await
            .map_err(|e| SwapError::ApprovalFailed {
                token: token.address(),
                reason: e.to_string(),
            })?;

        log_approval!("Approval confirmed: {:?}", tx_hash);
        Ok(ApprovalOutcome::Approved {
            tx_hash,
            amount: required,
        })
    }
}
