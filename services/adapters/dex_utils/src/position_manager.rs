//! Position manager call construction
//!
//! A partial withdrawal is two calls on the position manager: burn liquidity
//! with `decreaseLiquidity`, then sweep the owed tokens with `collect`. Both
//! are batched into one `multicall` so they land in the same transaction.

use crate::abi::uniswap_v3::{encode_collect, encode_decrease_liquidity, encode_multicall};
use crate::{DexError, MethodParameters};
use ethers_core::types::{Bytes, U256};
use types::{CollectParameters, RemovalParameters};

/// Encode `multicall([decreaseLiquidity(removal), collect(collect)])`
pub fn remove_call_parameters(
    removal: &RemovalParameters,
    collect: &CollectParameters,
) -> Result<MethodParameters, DexError> {
    if removal.token_id != collect.token_id {
        return Err(DexError::PositionMismatch {
            removal: removal.token_id,
            collect: collect.token_id,
        });
    }

    let calls = vec![
        encode_decrease_liquidity(removal)?,
        encode_collect(collect)?,
    ];

    Ok(MethodParameters {
        calldata: Bytes::from(encode_multicall(calls)?),
        value: U256::zero(),
    })
}
