//! Chain access seam
//!
//! Every component talks to the network through [`ChainClient`]: read-only
//! `eth_call`s for quotes, pool state, token metadata and positions, and
//! signed submissions for approvals and the optional final broadcast.
//! [`crate::ethers_client::EthersChainClient`] is the production
//! implementation; tests substitute an in-memory chain.

use async_trait::async_trait;
use ethers::types::{Address, Bytes, H256};
use thiserror::Error;
use types::TransactionDescriptor;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("RPC transport error: {0}")]
    Transport(String),

    #[error("No RPC endpoint configured (set RPC_URL)")]
    MissingEndpoint,

    #[error("Invalid RPC endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("No signing credential configured (set PRIVATE_KEY)")]
    MissingSigner,

    #[error("Invalid signing credential: {0}")]
    InvalidCredential(String),

    #[error("Transaction {tx_hash:?} reverted")]
    Reverted { tx_hash: H256 },

    #[error("Transaction {tx_hash:?} dropped before confirmation")]
    Dropped { tx_hash: H256 },
}

#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Chain id of the connected network
    fn chain_id(&self) -> u64;

    /// Address of the signing credential, `None` when read-only
    fn signer_address(&self) -> Option<Address>;

    /// Simulated call against the latest block
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ChainError>;

    /// Sign and broadcast `tx`, then wait for a successful receipt
    async fn send_transaction(&self, tx: &TransactionDescriptor) -> Result<H256, ChainError>;
}
