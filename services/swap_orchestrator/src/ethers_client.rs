//! # Ethers Chain Client - JSON-RPC Access and Transaction Signing
//!
//! ## Purpose
//!
//! Production [`ChainClient`] over an HTTP JSON-RPC endpoint. Read calls go
//! straight to the provider; submissions go through a `SignerMiddleware`
//! wrapping a `LocalWallet`, which fills nonce and gas limit, signs, broadcasts
//! and then waits for the receipt.
//!
//! ## Integration Points
//!
//! - **Configuration**: `NetworkConfig` supplies `RPC_URL` and the optional
//!   `PRIVATE_KEY`; a missing key yields a read-only client
//! - **Consumers**: readers, approval manager and transaction submitter
//!
//! ## Architecture Role
//!
//! ```text
//! Readers / Approvals / Submitter
//!           ↓
//!     [ChainClient trait]
//!           ↓
//! Provider<Http> (pooled reqwest client) ── SignerMiddleware<LocalWallet>
//!           ↓                                      ↓
//!       eth_call                       eth_sendRawTransaction + receipt
//! ```

use crate::chain::{ChainClient, ChainError};
use async_trait::async_trait;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{Address, Bytes, TransactionRequest, H256, U64};
use std::time::Duration;
use swap_config::NetworkConfig;
use tracing::{debug, info, warn};
use types::TransactionDescriptor;
use url::Url;

type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

pub struct EthersChainClient {
    provider: Provider<Http>,
    signer: Option<SignerClient>,
    chain_id: u64,
}

impl EthersChainClient {
    /// Connect to the configured endpoint and load the optional wallet
    pub async fn connect(network: &NetworkConfig) -> Result<Self, ChainError> {
        let rpc_url = network
            .rpc_url
            .as_deref()
            .ok_or(ChainError::MissingEndpoint)?;

        let http_client = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(60))
            .timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60))
            .build()
            .map_err(|e| ChainError::Transport(e.to_string()))?;

        let url: Url = rpc_url.parse().map_err(|e: url::ParseError| {
            ChainError::InvalidEndpoint {
                url: rpc_url.to_string(),
                reason: e.to_string(),
            }
        })?;
        let provider = Provider::new(Http::new_with_client(url, http_client));

        let chain_id = provider
            .get_chainid()
            .await
            .map_err(|e| ChainError::Transport(e.to_string()))?
            .as_u64();

        let signer = match network.private_key.as_deref() {
            Some(key) => {
                let wallet = key
                    .parse::<LocalWallet>()
                    .map_err(|e| ChainError::InvalidCredential(e.to_string()))?
                    .with_chain_id(chain_id);

                if let Some(configured) = network.wallet_address {
                    if configured != wallet.address() {
                        warn!(
                            "WALLET_ADDRESS {:?} differs from signer {:?}; the signer is used",
                            configured,
                            wallet.address()
                        );
                    }
                }
                Some(SignerMiddleware::new(provider.clone(), wallet))
            }
            None => None,
        };

        info!(
            "Connected to chain {} ({})",
            chain_id,
            if signer.is_some() {
                "signing enabled"
            } else {
                "read-only"
            }
        );

        Ok(Self {
            provider,
            signer,
            chain_id,
        })
    }
}

#[async_trait]
impl ChainClient for EthersChainClient {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn signer_address(&self) -> Option<Address> {
        self.signer.as_ref().map(|s| s.signer().address())
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ChainError> {
        let tx: TypedTransaction = TransactionRequest::new().to(to).data(data).into();
        self.provider
            .call(&tx, None)
            .await
            .map_err(|e| ChainError::Transport(e.to_string()))
    }

    async fn send_transaction(&self, tx: &TransactionDescriptor) -> Result<H256, ChainError> {
        let signer = self.signer.as_ref().ok_or(ChainError::MissingSigner)?;

        let request: TypedTransaction = tx.to_request().into();
        let pending = signer
            .send_transaction(request, None)
            .await
            .map_err(|e| ChainError::Transport(e.to_string()))?;
        let tx_hash = pending.tx_hash();
        debug!("Submitted transaction {:?} to {:?}", tx_hash, tx.to);

        let receipt = pending
            .await
            .map_err(|e| ChainError::Transport(e.to_string()))?
            .ok_or(ChainError::Dropped { tx_hash })?;

        if receipt.status == Some(U64::from(1)) {
            debug!(
                "Transaction {:?} confirmed in block {:?}",
                tx_hash, receipt.block_number
            );
            Ok(tx_hash)
        } else {
            Err(ChainError::Reverted { tx_hash })
        }
    }
}
