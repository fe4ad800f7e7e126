//! ERC-20 token ABIs
//!
//! Only the calls the orchestrator issues: allowance checks, approvals,
//! balances and metadata lookups.

use super::{decode_return, encode_call, function, param, AbiError, TokenReader};
use ethers_core::abi::{Function, ParamType, StateMutability, Token};
use ethers_core::types::{Address, U256};

/// function allowance(address owner, address spender) view returns (uint256)
pub fn allowance_function() -> Function {
    function(
        "allowance",
        vec![
            param("owner", ParamType::Address),
            param("spender", ParamType::Address),
        ],
        vec![param("", ParamType::Uint(256))],
        StateMutability::View,
    )
}

/// function approve(address spender, uint256 amount) returns (bool)
pub fn approve_function() -> Function {
    function(
        "approve",
        vec![
            param("spender", ParamType::Address),
            param("amount", ParamType::Uint(256)),
        ],
        vec![param("", ParamType::Bool)],
        StateMutability::NonPayable,
    )
}

/// function balanceOf(address account) view returns (uint256)
pub fn balance_of_function() -> Function {
    function(
        "balanceOf",
        vec![param("account", ParamType::Address)],
        vec![param("", ParamType::Uint(256))],
        StateMutability::View,
    )
}

/// function decimals() view returns (uint8)
pub fn decimals_function() -> Function {
    function(
        "decimals",
        vec![],
        vec![param("", ParamType::Uint(8))],
        StateMutability::View,
    )
}

/// function symbol() view returns (string)
pub fn symbol_function() -> Function {
    function(
        "symbol",
        vec![],
        vec![param("", ParamType::String)],
        StateMutability::View,
    )
}

pub fn encode_allowance(owner: Address, spender: Address) -> Result<Vec<u8>, AbiError> {
    encode_call(
        &allowance_function(),
        "allowance",
        &[Token::Address(owner), Token::Address(spender)],
    )
}

pub fn decode_allowance(data: &[u8]) -> Result<U256, AbiError> {
    let tokens = decode_return(&allowance_function(), "allowance", data)?;
    TokenReader::new(tokens).uint("allowance")
}

pub fn encode_approve(spender: Address, amount: U256) -> Result<Vec<u8>, AbiError> {
    encode_call(
        &approve_function(),
        "approve",
        &[Token::Address(spender), Token::Uint(amount)],
    )
}

pub fn encode_balance_of(account: Address) -> Result<Vec<u8>, AbiError> {
    encode_call(&balance_of_function(), "balanceOf", &[Token::Address(account)])
}

pub fn decode_balance_of(data: &[u8]) -> Result<U256, AbiError> {
    let tokens = decode_return(&balance_of_function(), "balanceOf", data)?;
    TokenReader::new(tokens).uint("balanceOf")
}

pub fn encode_decimals() -> Result<Vec<u8>, AbiError> {
    encode_call(&decimals_function(), "decimals", &[])
}

pub fn decode_decimals(data: &[u8]) -> Result<u8, AbiError> {
    let tokens = decode_return(&decimals_function(), "decimals", data)?;
    TokenReader::new(tokens).uint8("decimals")
}

pub fn encode_symbol() -> Result<Vec<u8>, AbiError> {
    encode_call(&symbol_function(), "symbol", &[])
}

/// Decode `symbol()` return data.
///
/// Some early tokens (MKR, SAI) return `bytes32` instead of `string`; a single
/// 32-byte word is read as a NUL-padded ASCII symbol.
pub fn decode_symbol(data: &[u8]) -> Result<String, AbiError> {
    if data.len() == 32 {
        let end = data.iter().position(|&b| b == 0).unwrap_or(32);
        return Ok(String::from_utf8_lossy(&data[..end]).into_owned());
    }
    let tokens = decode_return(&symbol_function(), "symbol", data)?;
    TokenReader::new(tokens).string("symbol")
}
