//! Slippage-adjusted trade bounds and approval buffers

use crate::error::AmmError;
use crate::percent::Percent;
use ethers_core::types::U256;
use types::{Trade, TradeType};

/// Least output the router must deliver for `trade` under `tolerance`.
///
/// Exact-output trades already fix the output, so the bound is the output itself.
pub fn minimum_amount_out(trade: &Trade, tolerance: &Percent) -> Result<U256, AmmError> {
    match trade.trade_type() {
        TradeType::ExactOutput => Ok(trade.output_amount()),
        TradeType::ExactInput => tolerance.shrink_floor(trade.output_amount()),
    }
}

/// Most input the router may pull for `trade` under `tolerance`.
pub fn maximum_amount_in(trade: &Trade, tolerance: &Percent) -> Result<U256, AmmError> {
    match trade.trade_type() {
        TradeType::ExactInput => Ok(trade.input_amount()),
        TradeType::ExactOutput => tolerance.grow_floor(trade.input_amount()),
    }
}

/// Allowance to grant for an exact-output swap: the quoted input plus
/// `buffer`, rounded up so the approval never falls below the requirement.
pub fn buffered_approval_amount(required: U256, buffer: &Percent) -> Result<U256, AmmError> {
    buffer.grow_ceil(required)
}
