//! Routes and priced trades

use crate::errors::ValidationError;
use crate::pool::Pool;
use crate::token::Token;
use ethers_core::types::U256;
use serde::{Deserialize, Serialize};

/// Which side of a trade is fixed by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    /// Input amount is fixed, output is quoted
    ExactInput,
    /// Output amount is fixed, input is quoted
    ExactOutput,
}

/// Ordered list of pools connecting an input token to an output token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pools: Vec<Pool>,
    input: Token,
    output: Token,
}

impl Route {
    /// Build a route, checking every hop shares a token with the previous one
    pub fn new(pools: Vec<Pool>, input: Token, output: Token) -> Result<Self, ValidationError> {
        if pools.is_empty() {
            return Err(ValidationError::EmptyRoute);
        }

        let mismatch = || ValidationError::RouteMismatch {
            from: input.to_string(),
            to: output.to_string(),
        };

        let mut current = &input;
        for pool in &pools {
            current = pool.other(current).ok_or_else(mismatch)?;
        }
        if current != &output {
            return Err(mismatch());
        }

        Ok(Self {
            pools,
            input,
            output,
        })
    }

    /// Single-hop route through `pool`, entering with `input`
    pub fn single_hop(pool: Pool, input: Token) -> Result<Self, ValidationError> {
        let output = pool
            .other(&input)
            .cloned()
            .ok_or_else(|| ValidationError::RouteMismatch {
                from: input.to_string(),
                to: format!("pool {:?}", pool.address()),
            })?;
        Self::new(vec![pool], input, output)
    }

    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    pub fn input(&self) -> &Token {
        &self.input
    }

    pub fn output(&self) -> &Token {
        &self.output
    }
}

/// A priced trade over a route.
///
/// Amounts are not re-derived here: the orchestrator validates the quoted side
/// against the caller's bound before constructing the trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    route: Route,
    input_amount: U256,
    output_amount: U256,
    trade_type: TradeType,
}

impl Trade {
    pub fn new(route: Route, input_amount: U256, output_amount: U256, trade_type: TradeType) -> Self {
        Self {
            route,
            input_amount,
            output_amount,
            trade_type,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn input_amount(&self) -> U256 {
        self.input_amount
    }

    pub fn output_amount(&self) -> U256 {
        self.output_amount
    }

    pub fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    pub fn input_token(&self) -> &Token {
        self.route.input()
    }

    pub fn output_token(&self) -> &Token {
        self.route.output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{FeeTier, PoolState};
    use ethers_core::types::Address;

    fn token(byte: u8, symbol: &str) -> Token {
        Token::new(1, Address::repeat_byte(byte), 18, symbol).unwrap()
    }

    fn pool(a: &Token, b: &Token) -> Pool {
        let state = PoolState::new(FeeTier::MEDIUM, 10, U256::from(1u128 << 96), 0).unwrap();
        Pool::new(a.clone(), b.clone(), Address::repeat_byte(0x99), state).unwrap()
    }

    #[test]
    fn test_single_hop_route() {
        let weth = token(0xc0, "WETH");
        let usdc = token(0xa0, "USDC");
        let route = Route::single_hop(pool(&weth, &usdc), weth.clone()).unwrap();

        assert_eq!(route.input(), &weth);
        assert_eq!(route.output(), &usdc);
        assert_eq!(route.pools().len(), 1);
    }

    #[test]
    fn test_route_rejects_foreign_input() {
        let weth = token(0xc0, "WETH");
        let usdc = token(0xa0, "USDC");
        let dai = token(0x6b, "DAI");

        assert!(matches!(
            Route::single_hop(pool(&weth, &usdc), dai.clone()),
            Err(ValidationError::RouteMismatch { .. })
        ));
        assert!(matches!(
            Route::new(vec![pool(&weth, &usdc)], weth, dai),
            Err(ValidationError::RouteMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_route_rejected() {
        let weth = token(0xc0, "WETH");
        let usdc = token(0xa0, "USDC");
        assert_eq!(
            Route::new(vec![], weth, usdc).unwrap_err(),
            ValidationError::EmptyRoute
        );
    }

    #[test]
    fn test_trade_type_serialization() {
        assert_eq!(
            serde_json::to_string(&TradeType::ExactOutput).unwrap(),
            "\"EXACT_OUTPUT\""
        );
    }
}
