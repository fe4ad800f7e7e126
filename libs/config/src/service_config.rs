//! Orchestrator Configuration Module
//!
//! Loads and validates the configuration every component receives. Values are
//! layered: built-in mainnet defaults, then an optional TOML/JSON file, then
//! `SWAP__<SECTION>__<KEY>` environment variables, then the plain
//! `RPC_URL` / `WALLET_ADDRESS` / `PRIVATE_KEY` variables for the network
//! credentials.

use crate::protocol::{mainnet, policy};
use anyhow::{bail, Context, Result};
use config_crate::{Config, Environment, File};
use ethers_core::types::{Address, H256};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use swap_amm::{Percent, POOL_INIT_CODE_HASH};
use tracing::{debug, info};
use types::GasFeeBounds;

/// Complete orchestrator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Contract addresses of the protocol deployment
    pub protocol: ProtocolConfig,
    /// Slippage, deadline, approval and gas policy
    pub policy: SwapPolicy,
    /// RPC endpoint and signing identity
    pub network: NetworkConfig,
}

/// Contract addresses of one protocol deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolConfig {
    /// Pool factory, the CREATE2 deployer of every pool
    pub factory: Address,
    /// Router that executes swaps
    pub swap_router: Address,
    /// Quoter used for read-only quotes
    pub quoter: Address,
    /// Non-fungible position manager
    pub position_manager: Address,
    /// keccak256 of the pool creation code
    pub pool_init_code_hash: H256,
}

/// Fixed policy applied to every swap and withdrawal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapPolicy {
    /// Slippage tolerance in basis points (100 = 1%)
    pub slippage_bps: u32,
    /// Seconds until the on-chain deadline
    pub deadline_secs: u64,
    /// Extra allowance on exact-output swaps, whole percent
    pub approval_buffer_percent: u32,
    /// Denominator for liquidity removal shares
    pub liquidity_denominator: u32,
    /// EIP-1559 max fee per gas in gwei
    pub max_fee_per_gas_gwei: u64,
    /// EIP-1559 max priority fee per gas in gwei
    pub max_priority_fee_per_gas_gwei: u64,
}

/// RPC endpoint and signing identity
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// HTTP JSON-RPC endpoint
    pub rpc_url: Option<String>,
    /// Address that owns the traded tokens and positions
    pub wallet_address: Option<Address>,
    /// Hex private key of the wallet; never serialized
    #[serde(skip_serializing)]
    pub private_key: Option<String>,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            factory: mainnet::FACTORY,
            swap_router: mainnet::SWAP_ROUTER,
            quoter: mainnet::QUOTER,
            position_manager: mainnet::POSITION_MANAGER,
            pool_init_code_hash: POOL_INIT_CODE_HASH,
        }
    }
}

impl Default for SwapPolicy {
    fn default() -> Self {
        Self {
            slippage_bps: policy::SLIPPAGE_BPS,
            deadline_secs: policy::DEADLINE_SECS,
            approval_buffer_percent: policy::APPROVAL_BUFFER_PERCENT,
            liquidity_denominator: policy::LIQUIDITY_DENOMINATOR,
            max_fee_per_gas_gwei: policy::MAX_FEE_PER_GAS_GWEI,
            max_priority_fee_per_gas_gwei: policy::MAX_PRIORITY_FEE_PER_GAS_GWEI,
        }
    }
}

impl SwapPolicy {
    /// Slippage tolerance as an exact percentage
    pub fn slippage(&self) -> Percent {
        Percent::from_bps(self.slippage_bps)
    }

    /// Exact-output approval buffer as an exact percentage
    pub fn approval_buffer(&self) -> Percent {
        Percent::from_whole(self.approval_buffer_percent)
    }

    pub fn gas_fee_bounds(&self) -> GasFeeBounds {
        GasFeeBounds::from_gwei(
            self.max_fee_per_gas_gwei,
            self.max_priority_fee_per_gas_gwei,
        )
    }
}

impl NetworkConfig {
    /// Apply `RPC_URL`, `WALLET_ADDRESS` and `PRIVATE_KEY` when present
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(rpc_url) = std::env::var("RPC_URL") {
            self.rpc_url = Some(rpc_url);
        }

        if let Ok(wallet) = std::env::var("WALLET_ADDRESS") {
            let address = wallet
                .parse::<Address>()
                .context("WALLET_ADDRESS is not a valid address")?;
            self.wallet_address = Some(address);
        }

        if let Ok(key) = std::env::var("PRIVATE_KEY") {
            self.private_key = Some(key);
        }

        Ok(self)
    }

    pub fn has_signer(&self) -> bool {
        self.private_key.is_some()
    }
}

impl fmt::Debug for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkConfig")
            .field("rpc_url", &self.rpc_url)
            .field("wallet_address", &self.wallet_address)
            .field(
                "private_key",
                &self.private_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl OrchestratorConfig {
    /// Load configuration with defaults, an optional file and environment
    /// overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            info!("Loading orchestrator config: {:?}", path);
            builder = builder.add_source(File::from(path).required(true));
        }

        // Override with environment variables (SWAP__ prefix)
        builder = builder.add_source(
            Environment::with_prefix("SWAP")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        let network = config.network.clone().with_env_overrides()?;
        let config = Self { network, ..config };

        debug!("Effective configuration: {:?}", config);
        Ok(config)
    }

    /// Save configuration to a TOML or JSON file, chosen by extension
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = self.to_pretty_string(path.extension().and_then(|e| e.to_str()))?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }

    /// Render as TOML (`Some("toml")`) or pretty JSON (`Some("json")` or `None`)
    pub fn to_pretty_string(&self, format: Option<&str>) -> Result<String> {
        match format {
            Some("toml") => toml::to_string_pretty(self).context("Failed to render TOML"),
            Some("json") | None => {
                serde_json::to_string_pretty(self).context("Failed to render JSON")
            }
            Some(other) => bail!("Unsupported config format: {}", other),
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        let contracts = [
            ("factory", self.protocol.factory),
            ("swap_router", self.protocol.swap_router),
            ("quoter", self.protocol.quoter),
            ("position_manager", self.protocol.position_manager),
        ];
        for (name, address) in contracts {
            if address.is_zero() {
                bail!("protocol.{} must not be the zero address", name);
            }
        }

        if self.protocol.pool_init_code_hash.is_zero() {
            bail!("protocol.pool_init_code_hash must be set");
        }

        if self.policy.slippage_bps > 10_000 {
            bail!("slippage_bps must be <= 10000 (100%)");
        }

        if self.policy.deadline_secs == 0 {
            bail!("deadline_secs must be positive");
        }

        if self.policy.liquidity_denominator == 0 {
            bail!("liquidity_denominator must be positive");
        }

        if self.policy.max_fee_per_gas_gwei == 0 {
            bail!("max_fee_per_gas_gwei must be positive");
        }

        if self.policy.max_priority_fee_per_gas_gwei > self.policy.max_fee_per_gas_gwei {
            bail!("max_priority_fee_per_gas_gwei must not exceed max_fee_per_gas_gwei");
        }

        if let Some(wallet) = self.network.wallet_address {
            if wallet.is_zero() {
                bail!("network.wallet_address must not be the zero address");
            }
        }

        Ok(())
    }
}
