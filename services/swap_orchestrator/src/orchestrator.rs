//! # Swap Orchestrator - Validated Single-Hop Swap Construction
//!
//! ## Purpose
//!
//! Turns a [`SwapRequest`] into a [`PreparedSwap`]: a priced trade, the
//! approval that backs it and an unsigned router transaction. Every amount in
//! the transaction is derived from a fresh quote and checked against the
//! caller's bound before anything is encoded.
//!
//! ## Integration Points
//!
//! - **Token Resolver**: decimals and symbol of both tokens, concurrently
//! - **Pool State Reader**: fee, liquidity, sqrt price and tick of the pool
//!   derived by CREATE2 from the configured factory
//! - **Quote Resolver**: forward quote for exact input, reverse quote for
//!   exact output
//! - **Approval Manager**: allowance for the swap router, awaited before
//!   encoding
//! - **`dex` crate**: `exactInputSingle` / `exactOutputSingle` call data
//!
//! ## Architecture Role
//!
//! ```text
//! SwapRequest
//!     ↓
//! [Resolve tokens] ──→ [Derive pool address] ──→ [Read pool state]
//!     ↓
//! [Quote] ──→ [Bound check] ──→ Trade
//!     ↓
//! [Ensure approval] ──→ [Encode router call] ──→ TransactionDescriptor
//! ```
//!
//! Exact-input swaps approve exactly the input amount. Exact-output swaps
//! approve the quoted input grown by the configured buffer and rounded up.

use crate::approval::{ApprovalManager, ApprovalOutcome};
use crate::chain::ChainClient;
use crate::deadline::deadline_after;
use crate::error::SwapError;
use crate::pool_state::PoolStateReader;
use crate::quote::{QuoteDirection, QuoteResolver};
use crate::tokens::TokenResolver;
use crate::{log_search, log_swap};
use dex::{swap_call_parameters, SwapOptions};
use ethers::types::{Address, U256};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use swap_amm::{buffered_approval_amount, pool_address_for_key, to_readable_amount};
use swap_config::OrchestratorConfig;
use types::{
    FeeTier, Pool, PoolKey, Route, Token, Trade, TradeType, TransactionDescriptor, ValidationError,
};

/// Fixed side of a swap and the caller's bound on the other side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapMode {
    ExactInput {
        amount_in: U256,
        amount_out_minimum: U256,
    },
    ExactOutput {
        amount_out: U256,
        amount_in_maximum: U256,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: FeeTier,
    pub mode: SwapMode,
    /// Receiver of the output; defaults to the trading wallet
    pub recipient: Option<Address>,
}

/// Validated swap ready to sign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedSwap {
    pub trade: Trade,
    pub approval: ApprovalOutcome,
    pub transaction: TransactionDescriptor,
}

pub struct SwapOrchestrator {
    client: Arc<dyn ChainClient>,
    config: Arc<OrchestratorConfig>,
    tokens: TokenResolver,
    pools: PoolStateReader,
    quotes: QuoteResolver,
    approvals: ApprovalManager,
}

impl SwapOrchestrator {
    pub fn new(client: Arc<dyn ChainClient>, config: Arc<OrchestratorConfig>) -> Self {
        Self {
            tokens: TokenResolver::new(client.clone()),
            pools: PoolStateReader::new(client.clone()),
            quotes: QuoteResolver::new(client.clone(), config.protocol.quoter),
            approvals: ApprovalManager::new(client.clone(), config.policy.gas_fee_bounds()),
            client,
            config,
        }
    }

    pub fn tokens(&self) -> &TokenResolver {
        &self.tokens
    }

    /// Wallet that trades: the signer if present, otherwise the configured
    /// wallet address
    pub fn owner(&self) -> Result<Address, SwapError> {
        self.client
            .signer_address()
            .or(self.config.network.wallet_address)
            .ok_or_else(|| {
                SwapError::Configuration(
                    "no wallet configured (set PRIVATE_KEY or WALLET_ADDRESS)".to_string(),
                )
            })
    }

    /// Resolve a pair, derive its pool address and read the pool's state
    pub async fn load_pool(
        &self,
        token_a: Address,
        token_b: Address,
        fee: FeeTier,
    ) -> Result<Pool, SwapError> {
        PoolKey::new(token_a, token_b, fee)?;
        let (a, b) = self.tokens.resolve_pair(token_a, token_b).await?;
        self.load_pool_for(a, b, fee).await
    }

    async fn load_pool_for(&self, a: Token, b: Token, fee: FeeTier) -> Result<Pool, SwapError> {
        let protocol = &self.config.protocol;
        let key = PoolKey::new(a.address(), b.address(), fee)?;
        let address = pool_address_for_key(protocol.factory, &key, protocol.pool_init_code_hash);
        log_search!("Pool {}/{} {} at {:?}", a.symbol(), b.symbol(), fee, address);

        let state = self.pools.read_pool_state(address).await?;
        if state.fee() != fee {
            return Err(SwapError::PoolStateUnavailable {
                pool: address,
                reason: format!("pool reports fee {} but {} was requested", state.fee(), fee),
            });
        }

        Ok(Pool::new(a, b, address, state)?)
    }

    /// Quote, validate, approve and encode a single-hop swap
    pub async fn build_swap(&self, request: &SwapRequest) -> Result<PreparedSwap, SwapError> {
        PoolKey::new(request.token_in, request.token_out, request.fee)?;
        self.owner()?;

        let (token_in, token_out) = self
            .tokens
            .resolve_pair(request.token_in, request.token_out)
            .await?;
        self.build_swap_with_tokens(request, token_in, token_out).await
    }

    /// [`build_swap`](Self::build_swap) for a caller that already resolved
    /// both tokens; their addresses must match the request
    pub async fn build_swap_with_tokens(
        &self,
        request: &SwapRequest,
        token_in: Token,
        token_out: Token,
    ) -> Result<PreparedSwap, SwapError> {
        PoolKey::new(request.token_in, request.token_out, request.fee)?;
        if token_in.address() != request.token_in || token_out.address() != request.token_out {
            return Err(ValidationError::RouteMismatch {
                from: token_in.to_string(),
                to: token_out.to_string(),
            }
            .into());
        }
        let owner = self.owner()?;
        let recipient = request.recipient.unwrap_or(owner);

        let pool = self
            .load_pool_for(token_in.clone(), token_out.clone(), request.fee)
            .await?;
        let route = Route::single_hop(pool, token_in.clone())?;

        let (trade, approval_amount) = match request.mode {
            SwapMode::ExactInput {
                amount_in,
                amount_out_minimum,
            } => {
                let quoted_out = self
                    .quotes
                    .quote(
                        &token_in,
                        &token_out,
                        request.fee,
                        amount_in,
                        QuoteDirection::Forward,
                    )
                    .await?;
                if quoted_out < amount_out_minimum {
                    return Err(SwapError::InsufficientOutput {
                        quoted: quoted_out,
                        minimum: amount_out_minimum,
                    });
                }
                let trade = Trade::new(route, amount_in, quoted_out, TradeType::ExactInput);
                (trade, amount_in)
            }
            SwapMode::ExactOutput {
                amount_out,
                amount_in_maximum,
            } => {
                let quoted_in = self
                    .quotes
                    .quote(
                        &token_in,
                        &token_out,
                        request.fee,
                        amount_out,
                        QuoteDirection::Reverse,
                    )
                    .await?;
                if quoted_in > amount_in_maximum {
                    return Err(SwapError::InsufficientInput {
                        quoted: quoted_in,
                        maximum: amount_in_maximum,
                    });
                }
                let buffered =
                    buffered_approval_amount(quoted_in, &self.config.policy.approval_buffer())?;
                let trade = Trade::new(route, quoted_in, amount_out, TradeType::ExactOutput);
                (trade, buffered)
            }
        };

        let spender = self.config.protocol.swap_router;
        let approval = self
            .approvals
            .ensure_approval(&token_in, owner, spender, approval_amount)
            .await?;

        let options = SwapOptions {
            slippage_tolerance: self.config.policy.slippage(),
            recipient,
            deadline: deadline_after(self.config.policy.deadline_secs)?,
        };
        let parameters = swap_call_parameters(&trade, &options)?;
        let transaction = TransactionDescriptor::new(
            spender,
            parameters.calldata,
            parameters.value,
            self.config.policy.gas_fee_bounds(),
        );

        log_swap!(
            "Prepared {:?} swap: {} {} -> {} {}",
            trade.trade_type(),
            readable(trade.input_amount(), &token_in),
            token_in.symbol(),
            readable(trade.output_amount(), &token_out),
            token_out.symbol()
        );

        Ok(PreparedSwap {
            trade,
            approval,
            transaction,
        })
    }
}

/// Human-readable amount for logs, falling back to raw units
fn readable(amount: U256, token: &Token) -> String {
    to_readable_amount(amount, token.decimals()).unwrap_or_else(|_| amount.to_string())
}
