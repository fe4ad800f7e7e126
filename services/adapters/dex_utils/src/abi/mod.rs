//! ABI definitions and call decoding for the swap protocol contracts
//!
//! This module provides:
//! - Canonical function ABIs for ERC-20 tokens and the Uniswap V3 contracts
//!   (pool, quoter, swap router, non-fungible position manager)
//! - Typed call encoders and return-data decoders with range validation
//!
//! Definitions are plain `ethers_core::abi` [`Function`] values so selectors and
//! encodings come from one place. Return data is decoded through the same
//! definition and checked against the Solidity type width before it is
//! narrowed into Rust integers.

pub mod erc20;
pub mod uniswap_v3;

use ethers_core::abi::{Function, Param, ParamType, StateMutability, Token};
use ethers_core::types::{Address, U256};

/// Error types for ABI encoding and decoding
#[derive(Debug, thiserror::Error)]
pub enum AbiError {
    #[error("ABI encoding failed for {function}: {source}")]
    Encoding {
        function: &'static str,
        #[source]
        source: ethers_core::abi::Error,
    },

    #[error("ABI parsing failed for {function}: {source}")]
    Decoding {
        function: &'static str,
        #[source]
        source: ethers_core::abi::Error,
    },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unexpected token for {field}: expected {expected}")]
    UnexpectedToken {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Value overflow: {field} = {value} exceeds {limit}")]
    ValueOverflow {
        field: &'static str,
        value: U256,
        limit: &'static str,
    },

    #[error("Call data selector {found} does not match {function}")]
    SelectorMismatch {
        function: &'static str,
        found: String,
    },
}

/// Build a function definition
#[allow(deprecated)]
pub(crate) fn function(
    name: &str,
    inputs: Vec<Param>,
    outputs: Vec<Param>,
    state_mutability: StateMutability,
) -> Function {
    Function {
        name: name.to_string(),
        inputs,
        outputs,
        constant: None,
        state_mutability,
    }
}

pub(crate) fn param(name: &str, kind: ParamType) -> Param {
    Param {
        name: name.to_string(),
        kind,
        internal_type: None,
    }
}

/// Encode `tokens` as call data for `function`
pub(crate) fn encode_call(
    function: &Function,
    label: &'static str,
    tokens: &[Token],
) -> Result<Vec<u8>, AbiError> {
    function
        .encode_input(tokens)
        .map_err(|source| AbiError::Encoding {
            function: label,
            source,
        })
}

/// Decode return data of `function`
pub(crate) fn decode_return(
    function: &Function,
    label: &'static str,
    data: &[u8],
) -> Result<Vec<Token>, AbiError> {
    function
        .decode_output(data)
        .map_err(|source| AbiError::Decoding {
            function: label,
            source,
        })
}

/// Decode call data (selector included) of `function`
pub(crate) fn decode_call(
    function: &Function,
    label: &'static str,
    data: &[u8],
) -> Result<Vec<Token>, AbiError> {
    let selector = function.short_signature();
    if data.len() < 4 || data[..4] != selector {
        let found = data.iter().take(4).map(|b| format!("{:02x}", b)).collect();
        return Err(AbiError::SelectorMismatch {
            function: label,
            found,
        });
    }
    function
        .decode_input(&data[4..])
        .map_err(|source| AbiError::Decoding {
            function: label,
            source,
        })
}

/// Sequential reader over decoded tokens with width checks
pub(crate) struct TokenReader {
    tokens: std::vec::IntoIter<Token>,
}

impl TokenReader {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }

    fn next(&mut self, field: &'static str) -> Result<Token, AbiError> {
        self.tokens.next().ok_or(AbiError::MissingField(field))
    }

    pub(crate) fn skip(&mut self, field: &'static str) -> Result<(), AbiError> {
        self.next(field).map(|_| ())
    }

    pub(crate) fn uint(&mut self, field: &'static str) -> Result<U256, AbiError> {
        match self.next(field)? {
            Token::Uint(value) => Ok(value),
            _ => Err(AbiError::UnexpectedToken {
                field,
                expected: "uint",
            }),
        }
    }

    pub(crate) fn uint128(&mut self, field: &'static str) -> Result<u128, AbiError> {
        let value = self.uint(field)?;
        if value > U256::from(u128::MAX) {
            return Err(AbiError::ValueOverflow {
                field,
                value,
                limit: "u128::MAX",
            });
        }
        Ok(value.as_u128())
    }

    pub(crate) fn uint24(&mut self, field: &'static str) -> Result<u32, AbiError> {
        let value = self.uint(field)?;
        if value >= U256::from(1u32 << 24) {
            return Err(AbiError::ValueOverflow {
                field,
                value,
                limit: "uint24",
            });
        }
        Ok(value.as_u32())
    }

    pub(crate) fn uint8(&mut self, field: &'static str) -> Result<u8, AbiError> {
        let value = self.uint(field)?;
        if value > U256::from(u8::MAX) {
            return Err(AbiError::ValueOverflow {
                field,
                value,
                limit: "uint8",
            });
        }
        Ok(value.as_u32() as u8)
    }

    /// int24 arrives sign-extended to 256 bits; anything outside
    /// [-2^23, 2^23) is rejected
    pub(crate) fn int24(&mut self, field: &'static str) -> Result<i32, AbiError> {
        let raw = match self.next(field)? {
            Token::Int(raw) => raw,
            _ => {
                return Err(AbiError::UnexpectedToken {
                    field,
                    expected: "int",
                })
            }
        };

        let half = U256::from(1u32 << 23);
        if raw < half || raw > U256::MAX - half {
            Ok(raw.low_u32() as i32)
        } else {
            Err(AbiError::ValueOverflow {
                field,
                value: raw,
                limit: "int24",
            })
        }
    }

    pub(crate) fn address(&mut self, field: &'static str) -> Result<Address, AbiError> {
        match self.next(field)? {
            Token::Address(address) => Ok(address),
            _ => Err(AbiError::UnexpectedToken {
                field,
                expected: "address",
            }),
        }
    }

    pub(crate) fn string(&mut self, field: &'static str) -> Result<String, AbiError> {
        match self.next(field)? {
            Token::String(value) => Ok(value),
            _ => Err(AbiError::UnexpectedToken {
                field,
                expected: "string",
            }),
        }
    }

    pub(crate) fn tuple(&mut self, field: &'static str) -> Result<TokenReader, AbiError> {
        match self.next(field)? {
            Token::Tuple(items) => Ok(TokenReader::new(items)),
            _ => Err(AbiError::UnexpectedToken {
                field,
                expected: "tuple",
            }),
        }
    }

    pub(crate) fn bytes_array(&mut self, field: &'static str) -> Result<Vec<Vec<u8>>, AbiError> {
        match self.next(field)? {
            Token::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Token::Bytes(bytes) => Ok(bytes),
                    _ => Err(AbiError::UnexpectedToken {
                        field,
                        expected: "bytes",
                    }),
                })
                .collect(),
            _ => Err(AbiError::UnexpectedToken {
                field,
                expected: "bytes[]",
            }),
        }
    }
}
