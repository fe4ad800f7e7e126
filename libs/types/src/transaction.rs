//! Unsigned transaction descriptors
//!
//! Terminal output of the swap and withdrawal builders. A descriptor carries
//! everything needed to sign and submit an EIP-1559 transaction except the
//! nonce and gas limit, which the signer fills in.

use ethers_core::types::{Address, Bytes, Eip1559TransactionRequest, U256};
use serde::{Deserialize, Serialize};

/// Fixed EIP-1559 fee caps attached to every descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasFeeBounds {
    /// Maximum total fee per gas in wei
    pub max_fee_per_gas: U256,
    /// Maximum priority fee (tip) per gas in wei
    pub max_priority_fee_per_gas: U256,
}

impl GasFeeBounds {
    pub fn from_gwei(max_fee_gwei: u64, max_priority_fee_gwei: u64) -> Self {
        let gwei = U256::exp10(9);
        Self {
            max_fee_per_gas: U256::from(max_fee_gwei) * gwei,
            max_priority_fee_per_gas: U256::from(max_priority_fee_gwei) * gwei,
        }
    }
}

/// Unsigned, not yet broadcast contract call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDescriptor {
    /// Destination contract
    pub to: Address,
    /// ABI-encoded call data
    pub data: Bytes,
    /// Native currency sent with the call
    pub value: U256,
    /// Maximum total fee per gas in wei
    pub max_fee_per_gas: U256,
    /// Maximum priority fee per gas in wei
    pub max_priority_fee_per_gas: U256,
}

impl TransactionDescriptor {
    pub fn new(to: Address, data: Bytes, value: U256, gas: GasFeeBounds) -> Self {
        Self {
            to,
            data,
            value,
            max_fee_per_gas: gas.max_fee_per_gas,
            max_priority_fee_per_gas: gas.max_priority_fee_per_gas,
        }
    }

    /// EIP-1559 request carrying this descriptor's fields
    pub fn to_request(&self) -> Eip1559TransactionRequest {
        Eip1559TransactionRequest::new()
            .to(self.to)
            .data(self.data.clone())
            .value(self.value)
            .max_fee_per_gas(self.max_fee_per_gas)
            .max_priority_fee_per_gas(self.max_priority_fee_per_gas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_bounds_from_gwei() {
        let bounds = GasFeeBounds::from_gwei(100, 2);
        assert_eq!(bounds.max_fee_per_gas, U256::from(100_000_000_000u64));
        assert_eq!(bounds.max_priority_fee_per_gas, U256::from(2_000_000_000u64));
    }

    #[test]
    fn test_descriptor_json_shape() {
        let descriptor = TransactionDescriptor::new(
            Address::repeat_byte(0x01),
            Bytes::from(vec![0x41, 0x4b, 0xf3, 0x89]),
            U256::zero(),
            GasFeeBounds::from_gwei(100, 100),
        );

        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["data"], "0x414bf389");
        assert_eq!(json["to"], "0x0101010101010101010101010101010101010101");
        assert!(json.get("max_priority_fee_per_gas").is_some());
    }

    #[test]
    fn test_request_carries_fee_caps() {
        let descriptor = TransactionDescriptor::new(
            Address::repeat_byte(0x02),
            Bytes::default(),
            U256::from(5),
            GasFeeBounds::from_gwei(3, 1),
        );
        let request = descriptor.to_request();
        assert_eq!(request.value, Some(U256::from(5)));
        assert_eq!(request.max_fee_per_gas, Some(U256::from(3_000_000_000u64)));
    }
}
