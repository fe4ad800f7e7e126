//! Exact rational percentages
//!
//! Mirrors the protocol SDK's `Percent`: a numerator over a denominator, applied
//! to integer amounts with explicit rounding direction.

use crate::error::AmmError;
use ethers_core::types::U256;
use std::fmt;

/// Basis-point denominator (100% = 10_000 bps)
pub const BPS_DENOMINATOR: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent {
    numerator: u64,
    denominator: u64,
}

impl Percent {
    pub fn new(numerator: u64, denominator: u64) -> Result<Self, AmmError> {
        if denominator == 0 {
            return Err(AmmError::ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Percentage expressed in basis points (100 = 1%)
    pub fn from_bps(bps: u32) -> Self {
        Self {
            numerator: bps as u64,
            denominator: BPS_DENOMINATOR,
        }
    }

    /// Whole percent (1 = 1%)
    pub fn from_whole(percent: u32) -> Self {
        Self {
            numerator: percent as u64,
            denominator: 100,
        }
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// `floor(amount * d / (d + n))`, i.e. `amount / (1 + p)`
    pub fn shrink_floor(&self, amount: U256) -> Result<U256, AmmError> {
        let scaled = amount
            .checked_mul(U256::from(self.denominator))
            .ok_or(AmmError::Overflow {
                operation: "percent shrink",
            })?;
        Ok(scaled / self.one_plus())
    }

    /// `floor(amount * (d + n) / d)`, i.e. `amount * (1 + p)`
    pub fn grow_floor(&self, amount: U256) -> Result<U256, AmmError> {
        Ok(self.grown(amount)? / U256::from(self.denominator))
    }

    /// `ceil(amount * (d + n) / d)`
    pub fn grow_ceil(&self, amount: U256) -> Result<U256, AmmError> {
        let grown = self.grown(amount)?;
        let denominator = U256::from(self.denominator);
        let quotient = grown / denominator;
        if (grown % denominator).is_zero() {
            Ok(quotient)
        } else {
            Ok(quotient + U256::one())
        }
    }

    fn one_plus(&self) -> U256 {
        U256::from(self.denominator) + U256::from(self.numerator)
    }

    fn grown(&self, amount: U256) -> Result<U256, AmmError> {
        amount
            .checked_mul(self.one_plus())
            .ok_or(AmmError::Overflow {
                operation: "percent grow",
            })
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}%",
            self.numerator as f64 * 100.0 / self.denominator as f64
        )
    }
}
