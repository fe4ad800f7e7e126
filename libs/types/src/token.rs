//! ERC-20 token identity

use crate::errors::ValidationError;
use ethers_core::types::Address;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An ERC-20 token on a specific chain.
///
/// Two tokens are the same entity iff their chain id and address match;
/// decimals and symbol are descriptive metadata and take no part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    chain_id: u64,
    address: Address,
    decimals: u8,
    symbol: String,
}

impl Token {
    /// Create a token, rejecting the zero address
    pub fn new(
        chain_id: u64,
        address: Address,
        decimals: u8,
        symbol: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if address.is_zero() {
            return Err(ValidationError::ZeroAddress { field: "token" });
        }
        Ok(Self {
            chain_id,
            address,
            decimals,
            symbol: symbol.into(),
        })
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Protocol token ordering: the token with the lower address is token0
    pub fn sorts_before(&self, other: &Token) -> Result<bool, ValidationError> {
        if self.chain_id != other.chain_id {
            return Err(ValidationError::ChainMismatch {
                left: self.chain_id,
                right: other.chain_id,
            });
        }
        if self.address == other.address {
            return Err(ValidationError::IdenticalTokens);
        }
        Ok(self.address < other.address)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.symbol, self.address)
    }
}
