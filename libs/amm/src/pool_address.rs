//! Deterministic pool address derivation
//!
//! Pools are deployed by the factory with CREATE2, salted by
//! `keccak256(abi.encode(token0, token1, fee))`. Deriving the address locally
//! avoids a `getPool` round trip and gives the same answer for either token
//! order.

use crate::error::AmmError;
use ethers_core::abi::{self, Token as AbiToken};
use ethers_core::types::{Address, H256, U256};
use ethers_core::utils::{get_create2_address_from_hash, keccak256};
use types::{FeeTier, PoolKey};

/// keccak256 of the pool contract creation code
pub const POOL_INIT_CODE_HASH: H256 = H256([
    0xe3, 0x4f, 0x19, 0x9b, 0x19, 0xb2, 0xb4, 0xf4, 0x7f, 0x68, 0x44, 0x26, 0x19, 0xd5, 0x55, 0x52,
    0x7d, 0x24, 0x4f, 0x78, 0xa3, 0x29, 0x7e, 0xa8, 0x93, 0x25, 0xf8, 0x43, 0xf8, 0x7b, 0x8b, 0x54,
]);

/// Address of the pool for an unordered token pair
pub fn compute_pool_address(
    factory: Address,
    token_a: Address,
    token_b: Address,
    fee: FeeTier,
    init_code_hash: H256,
) -> Result<Address, AmmError> {
    let key = PoolKey::new(token_a, token_b, fee)?;
    Ok(pool_address_for_key(factory, &key, init_code_hash))
}

/// Address of the pool identified by an already-sorted key
pub fn pool_address_for_key(factory: Address, key: &PoolKey, init_code_hash: H256) -> Address {
    let salt = keccak256(abi::encode(&[
        AbiToken::Address(key.token0()),
        AbiToken::Address(key.token1()),
        AbiToken::Uint(U256::from(key.fee().pips())),
    ]));
    get_create2_address_from_hash(factory, salt, init_code_hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ValidationError;

    fn addr(s: &str) -> Address {
        s.parse().unwrap()
    }

    const FACTORY: &str = "0x1F98431c8aD98523631AE4a59f267346ea31F984";
    const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
    const WETH: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";

    #[test]
    fn test_mainnet_usdc_weth_pools() {
        let medium = compute_pool_address(
            addr(FACTORY),
            addr(USDC),
            addr(WETH),
            FeeTier::MEDIUM,
            POOL_INIT_CODE_HASH,
        )
        .unwrap();
        assert_eq!(medium, addr("0x8ad599c3A0ff1De082011EFDDc58f1908eb6e6D8"));

        let low = compute_pool_address(
            addr(FACTORY),
            addr(WETH),
            addr(USDC),
            FeeTier::LOW,
            POOL_INIT_CODE_HASH,
        )
        .unwrap();
        assert_eq!(low, addr("0x88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640"));
    }

    #[test]
    fn test_identical_tokens_rejected() {
        let result = compute_pool_address(
            addr(FACTORY),
            addr(USDC),
            addr(USDC),
            FeeTier::MEDIUM,
            POOL_INIT_CODE_HASH,
        );
        assert_eq!(
            result.unwrap_err(),
            AmmError::Validation(ValidationError::IdenticalTokens)
        );
    }

    #[test]
    fn test_fee_changes_address() {
        let a = compute_pool_address(
            addr(FACTORY),
            addr(USDC),
            addr(WETH),
            FeeTier::HIGH,
            POOL_INIT_CODE_HASH,
        )
        .unwrap();
        let b = compute_pool_address(
            addr(FACTORY),
            addr(USDC),
            addr(WETH),
            FeeTier::LOWEST,
            POOL_INIT_CODE_HASH,
        )
        .unwrap();
        assert_ne!(a, b);
    }
}
