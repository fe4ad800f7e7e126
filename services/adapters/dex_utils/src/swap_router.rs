//! Swap router call construction
//!
//! Turns a priced [`Trade`] into router call data, applying the slippage
//! tolerance the same way the protocol SDK does: exact-input trades bound the
//! output from below, exact-output trades bound the input from above.

use crate::abi::uniswap_v3::{
    encode_exact_input_single, encode_exact_output_single, ExactSingleParams,
};
use crate::{DexError, MethodParameters};
use ethers_core::types::{Address, Bytes, U256};
use swap_amm::{maximum_amount_in, minimum_amount_out, Percent};
use tracing::debug;
use types::{Trade, TradeType};

/// Options applied to every router call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOptions {
    pub slippage_tolerance: Percent,
    pub recipient: Address,
    /// Unix timestamp after which the router reverts
    pub deadline: u64,
}

/// Encode `exactInputSingle` / `exactOutputSingle` for a single-hop trade
pub fn swap_call_parameters(
    trade: &Trade,
    options: &SwapOptions,
) -> Result<MethodParameters, DexError> {
    let pool = match trade.route().pools() {
        [pool] => pool,
        pools => return Err(DexError::UnsupportedRoute { hops: pools.len() }),
    };

    let amount_out_minimum = minimum_amount_out(trade, &options.slippage_tolerance)?;
    let amount_in_maximum = maximum_amount_in(trade, &options.slippage_tolerance)?;

    let (amount, amount_limit) = match trade.trade_type() {
        TradeType::ExactInput => (trade.input_amount(), amount_out_minimum),
        TradeType::ExactOutput => (trade.output_amount(), amount_in_maximum),
    };

    let params = ExactSingleParams {
        token_in: trade.input_token().address(),
        token_out: trade.output_token().address(),
        fee: pool.fee(),
        recipient: options.recipient,
        deadline: options.deadline,
        amount,
        amount_limit,
        sqrt_price_limit_x96: U256::zero(),
    };

    let calldata = match trade.trade_type() {
        TradeType::ExactInput => encode_exact_input_single(&params)?,
        TradeType::ExactOutput => encode_exact_output_single(&params)?,
    };

    debug!(
        trade_type = ?trade.trade_type(),
        %amount,
        %amount_limit,
        deadline = options.deadline,
        "Encoded router call"
    );

    Ok(MethodParameters {
        calldata: Bytes::from(calldata),
        value: U256::zero(),
    })
}
