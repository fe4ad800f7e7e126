//! Conversion between raw token units and human-readable decimal strings

use crate::error::AmmError;
use ethers_core::types::U256;
use ethers_core::utils::{format_units, parse_units};

/// Render a raw amount with `decimals` places, trimming trailing zeros
/// (`1_500_000` with 6 decimals is `"1.5"`).
pub fn to_readable_amount(amount: U256, decimals: u8) -> Result<String, AmmError> {
    let formatted =
        format_units(amount, decimals as u32).map_err(|e| AmmError::InvalidAmount {
            input: amount.to_string(),
            reason: e.to_string(),
        })?;

    if !formatted.contains('.') {
        return Ok(formatted);
    }
    let trimmed = formatted.trim_end_matches('0');
    if trimmed.ends_with('.') {
        Ok(format!("{}0", trimmed))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Parse a decimal string into raw units with `decimals` places
pub fn from_readable_amount(text: &str, decimals: u8) -> Result<U256, AmmError> {
    let invalid = |reason: String| AmmError::InvalidAmount {
        input: text.to_string(),
        reason,
    };

    let text_trimmed = text.trim();
    if text_trimmed.starts_with('-') {
        return Err(invalid("amount cannot be negative".to_string()));
    }
    let parsed =
        parse_units(text_trimmed, decimals as u32).map_err(|e| invalid(e.to_string()))?;
    Ok(parsed.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_readable() {
        assert_eq!(to_readable_amount(U256::from(1_500_000), 6).unwrap(), "1.5");
        assert_eq!(
            to_readable_amount(U256::exp10(18), 18).unwrap(),
            "1.0"
        );
    }

    #[test]
    fn test_from_readable() {
        assert_eq!(
            from_readable_amount("10000", 6).unwrap(),
            U256::from(10_000_000_000u64)
        );
        assert_eq!(
            from_readable_amount("0.1", 18).unwrap(),
            U256::exp10(17)
        );
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            from_readable_amount("-1", 18),
            Err(AmmError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(from_readable_amount("ten", 18).is_err());
    }
}
