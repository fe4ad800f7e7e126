//! Optional broadcast of prepared transactions
//!
//! The builders never submit anything themselves; the binary hands a
//! descriptor to [`TransactionSubmitter`] only when asked to.

use crate::chain::{ChainClient, ChainError};
use crate::error::SwapError;
use crate::log_success;
use ethers::types::H256;
use std::sync::Arc;
use types::TransactionDescriptor;

pub struct TransactionSubmitter {
    client: Arc<dyn ChainClient>,
}

impl TransactionSubmitter {
    pub fn new(client: Arc<dyn ChainClient>) -> Self {
        Self { client }
    }

    /// Sign, broadcast and await `tx`
    pub async fn submit(&self, tx: &TransactionDescriptor) -> Result<H256, SwapError> {
        if self.client.signer_address().is_none() {
            return Err(SwapError::Configuration(ChainError::MissingSigner.to_string()));
        }

        let tx_hash = self
            .client
            .send_transaction(tx)
            .await
            .map_err(SwapError::SubmissionFailed)?;

        log_success!("Transaction {:?} confirmed", tx_hash);
        Ok(tx_hash)
    }
}
