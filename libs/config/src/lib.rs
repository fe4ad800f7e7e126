//! # Swap Orchestrator Configuration
//!
//! Protocol addresses, swap policy and network settings, passed explicitly
//! into every component instead of living in process-wide globals, so one
//! process can target several networks and tests can inject their own values.
//!
//! ## Features
//!
//! - **Protocol Constants**: Uniswap V3 mainnet contract addresses, common
//!   token addresses, the pool init code hash
//! - **Policy Defaults**: 1% slippage, 20 minute deadline, 1% exact-output
//!   approval buffer, fixed EIP-1559 fee caps
//! - **Layered Loading**: optional TOML/JSON file, `SWAP__*` environment
//!   overrides, then `RPC_URL` / `WALLET_ADDRESS` / `PRIVATE_KEY`
//!
//! ## Usage
//!
//! ```rust
//! use swap_config::{protocol, OrchestratorConfig};
//!
//! let config = OrchestratorConfig::default();
//! assert_eq!(config.protocol.factory, protocol::mainnet::FACTORY);
//! assert_eq!(config.policy.slippage_bps, protocol::policy::SLIPPAGE_BPS);
//! config.validate().unwrap();
//! ```

pub mod protocol;
pub mod service_config;

pub use service_config::{NetworkConfig, OrchestratorConfig, ProtocolConfig, SwapPolicy};
