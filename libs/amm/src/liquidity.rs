//! Proportional liquidity removal

use crate::error::AmmError;

/// Liquidity to decrease when withdrawing `share / denominator` of a position.
///
/// Divides first and multiplies second, exactly as the contract-side integer
/// math does: fractional liquidity below `1 / denominator` of the position is
/// truncated, so the result never exceeds the authorized share.
pub fn liquidity_to_remove(
    position_liquidity: u128,
    share: u32,
    denominator: u32,
) -> Result<u128, AmmError> {
    if denominator == 0 {
        return Err(AmmError::ZeroDenominator);
    }
    (position_liquidity / denominator as u128)
        .checked_mul(share as u128)
        .ok_or(AmmError::Overflow {
            operation: "liquidity removal",
        })
}
