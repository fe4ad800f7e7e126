//! # Swap Orchestrator - Concentrated-Liquidity Swap and Withdrawal Builder
//!
//! ## Purpose
//!
//! Client-side orchestration over a Uniswap-V3 style deployment: derives pool
//! addresses, reads pool state and quotes, enforces the caller's price bounds,
//! makes sure the router holds a sufficient allowance and encodes the final
//! swap or partial-withdrawal transaction. Transactions are returned unsigned;
//! broadcasting is a separate, explicit step.
//!
//! ## Integration Points
//!
//! - **Input Sources**: `SwapRequest` / withdrawal requests from the CLI or a
//!   caller embedding the library
//! - **Chain Access**: [`ChainClient`] trait, implemented over `ethers` by
//!   [`EthersChainClient`]
//! - **Configuration**: `swap_config::OrchestratorConfig` (contract addresses,
//!   slippage, deadline, gas bounds, credentials)
//! - **Output Destinations**: [`TransactionDescriptor`](types::TransactionDescriptor)
//!   values, optionally submitted via [`TransactionSubmitter`]
//!
//! ## Architecture Role
//!
//! ```text
//!                         ┌──────────────────────┐
//!   SwapRequest ─────────▶│   SwapOrchestrator   │──────▶ PreparedSwap
//!                         └──────────┬───────────┘
//!            ┌────────────┬──────────┼─────────────┬──────────────┐
//!            ▼            ▼          ▼             ▼              ▼
//!     TokenResolver  PoolStateReader QuoteResolver ApprovalManager dex encoders
//!            └────────────┴──────────┼─────────────┘
//!                                    ▼
//!                             [ChainClient]
//!                                    ▲
//!   token id + share ───▶ WithdrawalPlanner ──────▶ WithdrawalPlan
//! ```

pub mod approval;
pub mod chain;
pub mod deadline;
pub mod error;
pub mod ethers_client;
pub mod liquidity;
pub mod logging;
pub mod orchestrator;
pub mod pool_state;
pub mod quote;
pub mod submitter;
pub mod tokens;

pub use approval::{ApprovalManager, ApprovalOutcome};
pub use chain::{ChainClient, ChainError};
pub use error::SwapError;
pub use ethers_client::EthersChainClient;
pub use liquidity::{compute_removal, RemovalTarget, WithdrawalPlan, WithdrawalPlanner};
pub use orchestrator::{PreparedSwap, SwapMode, SwapOrchestrator, SwapRequest};
pub use pool_state::PoolStateReader;
pub use quote::{QuoteDirection, QuoteResolver};
pub use submitter::TransactionSubmitter;
pub use tokens::TokenResolver;
