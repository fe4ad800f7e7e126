//! Protocol constants
//!
//! Contract addresses for the Uniswap V3 deployment on Ethereum mainnet and
//! the default swap policy. Other deployments are configured through
//! [`crate::ProtocolConfig`].

/// Uniswap V3 core and periphery contracts on Ethereum mainnet
pub mod mainnet {
    use ethers_core::types::{Address, H160};

    /// Chain id of Ethereum mainnet
    pub const CHAIN_ID: u64 = 1;

    /// UniswapV3Factory (0x1F98431c8aD98523631AE4a59f267346ea31F984)
    pub const FACTORY: Address = H160([
        0x1f, 0x98, 0x43, 0x1c, 0x8a, 0xd9, 0x85, 0x23, 0x63, 0x1a, 0xe4, 0xa5, 0x9f, 0x26, 0x73,
        0x46, 0xea, 0x31, 0xf9, 0x84,
    ]);

    /// SwapRouter (0xE592427A0AEce92De3Edee1F18E0157C05861564)
    pub const SWAP_ROUTER: Address = H160([
        0xe5, 0x92, 0x42, 0x7a, 0x0a, 0xec, 0xe9, 0x2d, 0xe3, 0xed, 0xee, 0x1f, 0x18, 0xe0, 0x15,
        0x7c, 0x05, 0x86, 0x15, 0x64,
    ]);

    /// Quoter (0xb27308f9F90D607463bb33eA1BeBb41C27CE5AB6)
    pub const QUOTER: Address = H160([
        0xb2, 0x73, 0x08, 0xf9, 0xf9, 0x0d, 0x60, 0x74, 0x63, 0xbb, 0x33, 0xea, 0x1b, 0xeb, 0xb4,
        0x1c, 0x27, 0xce, 0x5a, 0xb6,
    ]);

    /// NonfungiblePositionManager (0xC36442b4a4522E871399CD717aBDD847Ab11FE88)
    pub const POSITION_MANAGER: Address = H160([
        0xc3, 0x64, 0x42, 0xb4, 0xa4, 0x52, 0x2e, 0x87, 0x13, 0x99, 0xcd, 0x71, 0x7a, 0xbd, 0xd8,
        0x47, 0xab, 0x11, 0xfe, 0x88,
    ]);
}

/// Frequently traded ERC-20 tokens on Ethereum mainnet
pub mod tokens {
    use ethers_core::types::{Address, H160};

    /// 0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2
    pub const WETH: Address = H160([
        0xc0, 0x2a, 0xaa, 0x39, 0xb2, 0x23, 0xfe, 0x8d, 0x0a, 0x0e, 0x5c, 0x4f, 0x27, 0xea, 0xd9,
        0x08, 0x3c, 0x75, 0x6c, 0xc2,
    ]);

    /// 0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48
    pub const USDC: Address = H160([
        0xa0, 0xb8, 0x69, 0x91, 0xc6, 0x21, 0x8b, 0x36, 0xc1, 0xd1, 0x9d, 0x4a, 0x2e, 0x9e, 0xb0,
        0xce, 0x36, 0x06, 0xeb, 0x48,
    ]);

    /// 0x6B175474E89094C44Da98b954EedeAC495271d0F
    pub const DAI: Address = H160([
        0x6b, 0x17, 0x54, 0x74, 0xe8, 0x90, 0x94, 0xc4, 0x4d, 0xa9, 0x8b, 0x95, 0x4e, 0xed, 0xea,
        0xc4, 0x95, 0x27, 0x1d, 0x0f,
    ]);
}

/// Default swap and withdrawal policy
pub mod policy {
    /// Slippage tolerance in basis points (100 = 1%)
    pub const SLIPPAGE_BPS: u32 = 100;

    /// Seconds from now until swap and withdrawal calls expire
    pub const DEADLINE_SECS: u64 = 60 * 20;

    /// Extra allowance granted on exact-output swaps, in whole percent
    pub const APPROVAL_BUFFER_PERCENT: u32 = 1;

    /// Denominator for liquidity removal shares (10_000 = basis points)
    pub const LIQUIDITY_DENOMINATOR: u32 = 10_000;

    /// EIP-1559 max fee per gas, gwei
    pub const MAX_FEE_PER_GAS_GWEI: u64 = 100;

    /// EIP-1559 max priority fee per gas, gwei
    pub const MAX_PRIORITY_FEE_PER_GAS_GWEI: u64 = 100;
}
