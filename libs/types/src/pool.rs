//! Pool identity, fee tiers and on-chain pool state
//!
//! A pool is identified by its sorted token pair and fee tier; its address is
//! derived from that identity (see `swap_amm::pool_address`). The state read
//! from the pool contract is wrapped in [`PoolState`], which refuses values
//! outside the protocol's tick and price domain.

use crate::errors::ValidationError;
use crate::token::Token;
use ethers_core::types::{Address, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest tick representable by the protocol
pub const MIN_TICK: i32 = -887272;
/// Highest tick representable by the protocol
pub const MAX_TICK: i32 = 887272;
/// sqrtPriceX96 at MIN_TICK
pub const MIN_SQRT_RATIO: U256 = U256([4295128739, 0, 0, 0]);
/// sqrtPriceX96 at MAX_TICK (1461446703485210103287273052203988822378723970342)
pub const MAX_SQRT_RATIO: U256 = U256([0x5d951d5263988d26, 0xefd1fc6a50648849, 0xfffd8963, 0]);

/// Pool fee in hundredths of a basis point (3000 = 0.3%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FeeTier(u32);

impl FeeTier {
    /// 0.01%
    pub const LOWEST: FeeTier = FeeTier(100);
    /// 0.05%
    pub const LOW: FeeTier = FeeTier(500);
    /// 0.3%
    pub const MEDIUM: FeeTier = FeeTier(3000);
    /// 1%
    pub const HIGH: FeeTier = FeeTier(10000);

    pub fn new(pips: u32) -> Result<Self, ValidationError> {
        if pips >= 1_000_000 {
            return Err(ValidationError::FeeOutOfRange(pips));
        }
        Ok(Self(pips))
    }

    pub fn pips(&self) -> u32 {
        self.0
    }

    /// Tick spacing the factory enables for this fee, if it is a standard tier
    pub fn tick_spacing(&self) -> Option<i32> {
        match self.0 {
            100 => Some(1),
            500 => Some(10),
            3000 => Some(60),
            10000 => Some(200),
            _ => None,
        }
    }
}

impl TryFrom<u32> for FeeTier {
    type Error = ValidationError;

    fn try_from(pips: u32) -> Result<Self, Self::Error> {
        FeeTier::new(pips)
    }
}

impl From<FeeTier> for u32 {
    fn from(fee: FeeTier) -> Self {
        fee.0
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0 as f64 / 100.0)
    }
}

/// Canonical identity of a pool: sorted token pair plus fee tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolKey {
    token0: Address,
    token1: Address,
    fee: FeeTier,
}

impl PoolKey {
    /// Build a key from an unordered token pair
    pub fn new(token_a: Address, token_b: Address, fee: FeeTier) -> Result<Self, ValidationError> {
        if token_a.is_zero() || token_b.is_zero() {
            return Err(ValidationError::ZeroAddress { field: "pool token" });
        }
        if token_a == token_b {
            return Err(ValidationError::IdenticalTokens);
        }
        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };
        Ok(Self {
            token0,
            token1,
            fee,
        })
    }

    pub fn token0(&self) -> Address {
        self.token0
    }

    pub fn token1(&self) -> Address {
        self.token1
    }

    pub fn fee(&self) -> FeeTier {
        self.fee
    }
}

/// Pool state as read from `fee()`, `liquidity()` and `slot0()`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    fee: FeeTier,
    liquidity: u128,
    sqrt_price_x96: U256,
    tick: i32,
}

impl PoolState {
    pub fn new(
        fee: FeeTier,
        liquidity: u128,
        sqrt_price_x96: U256,
        tick: i32,
    ) -> Result<Self, ValidationError> {
        if !(MIN_TICK..=MAX_TICK).contains(&tick) {
            return Err(ValidationError::TickOutOfRange(tick));
        }
        if sqrt_price_x96 < MIN_SQRT_RATIO || sqrt_price_x96 > MAX_SQRT_RATIO {
            return Err(ValidationError::SqrtPriceOutOfRange(sqrt_price_x96));
        }
        Ok(Self {
            fee,
            liquidity,
            sqrt_price_x96,
            tick,
        })
    }

    pub fn fee(&self) -> FeeTier {
        self.fee
    }

    pub fn liquidity(&self) -> u128 {
        self.liquidity
    }

    pub fn sqrt_price_x96(&self) -> U256 {
        self.sqrt_price_x96
    }

    pub fn tick(&self) -> i32 {
        self.tick
    }
}

/// A pool with resolved tokens, its derived address and a state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    token0: Token,
    token1: Token,
    address: Address,
    state: PoolState,
}

impl Pool {
    /// Build a pool from an unordered token pair; tokens are sorted into
    /// token0/token1 by address
    pub fn new(
        token_a: Token,
        token_b: Token,
        address: Address,
        state: PoolState,
    ) -> Result<Self, ValidationError> {
        if address.is_zero() {
            return Err(ValidationError::ZeroAddress { field: "pool" });
        }
        let (token0, token1) = if token_a.sorts_before(&token_b)? {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };
        Ok(Self {
            token0,
            token1,
            address,
            state,
        })
    }

    pub fn token0(&self) -> &Token {
        &self.token0
    }

    pub fn token1(&self) -> &Token {
        &self.token1
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn state(&self) -> &PoolState {
        &self.state
    }

    pub fn fee(&self) -> FeeTier {
        self.state.fee
    }

    pub fn involves(&self, token: &Token) -> bool {
        &self.token0 == token || &self.token1 == token
    }

    /// The token on the other side of `token`, if `token` belongs to the pool
    pub fn other(&self, token: &Token) -> Option<&Token> {
        if &self.token0 == token {
            Some(&self.token1)
        } else if &self.token1 == token {
            Some(&self.token0)
        } else {
            None
        }
    }

    pub fn key(&self) -> PoolKey {
        PoolKey {
            token0: self.token0.address(),
            token1: self.token1.address(),
            fee: self.state.fee,
        }
    }
}
