//! Uniswap V3 protocol ABIs
//!
//! Canonical function definitions for the pool, the V1 quoter, the V1 swap
//! router and the non-fungible position manager, with typed encoders and
//! decoders for each call the orchestrator makes.

use super::{decode_call, decode_return, encode_call, function, param, AbiError, TokenReader};
use ethers_core::abi::{Function, ParamType, StateMutability, Token};
use ethers_core::types::{Address, U256};
use types::{CollectParameters, FeeTier, PositionRecord, RemovalParameters};

// ---------------------------------------------------------------------------
// Pool
// ---------------------------------------------------------------------------

/// function fee() view returns (uint24)
pub fn fee_function() -> Function {
    function(
        "fee",
        vec![],
        vec![param("", ParamType::Uint(24))],
        StateMutability::View,
    )
}

/// function liquidity() view returns (uint128)
pub fn liquidity_function() -> Function {
    function(
        "liquidity",
        vec![],
        vec![param("", ParamType::Uint(128))],
        StateMutability::View,
    )
}

/// function slot0() view returns (uint160 sqrtPriceX96, int24 tick,
/// uint16 observationIndex, uint16 observationCardinality,
/// uint16 observationCardinalityNext, uint8 feeProtocol, bool unlocked)
pub fn slot0_function() -> Function {
    function(
        "slot0",
        vec![],
        vec![
            param("sqrtPriceX96", ParamType::Uint(160)),
            param("tick", ParamType::Int(24)),
            param("observationIndex", ParamType::Uint(16)),
            param("observationCardinality", ParamType::Uint(16)),
            param("observationCardinalityNext", ParamType::Uint(16)),
            param("feeProtocol", ParamType::Uint(8)),
            param("unlocked", ParamType::Bool),
        ],
        StateMutability::View,
    )
}

/// Fields of `slot0()` the orchestrator uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot0 {
    pub sqrt_price_x96: U256,
    pub tick: i32,
}

pub fn encode_fee() -> Result<Vec<u8>, AbiError> {
    encode_call(&fee_function(), "fee", &[])
}

pub fn decode_fee(data: &[u8]) -> Result<u32, AbiError> {
    let tokens = decode_return(&fee_function(), "fee", data)?;
    TokenReader::new(tokens).uint24("fee")
}

pub fn encode_liquidity() -> Result<Vec<u8>, AbiError> {
    encode_call(&liquidity_function(), "liquidity", &[])
}

pub fn decode_liquidity(data: &[u8]) -> Result<u128, AbiError> {
    let tokens = decode_return(&liquidity_function(), "liquidity", data)?;
    TokenReader::new(tokens).uint128("liquidity")
}

pub fn encode_slot0() -> Result<Vec<u8>, AbiError> {
    encode_call(&slot0_function(), "slot0", &[])
}

pub fn decode_slot0(data: &[u8]) -> Result<Slot0, AbiError> {
    let tokens = decode_return(&slot0_function(), "slot0", data)?;
    let mut reader = TokenReader::new(tokens);
    Ok(Slot0 {
        sqrt_price_x96: reader.uint("sqrtPriceX96")?,
        tick: reader.int24("tick")?,
    })
}

// ---------------------------------------------------------------------------
// Quoter (V1)
// ---------------------------------------------------------------------------

/// function quoteExactInputSingle(address tokenIn, address tokenOut,
/// uint24 fee, uint256 amountIn, uint160 sqrtPriceLimitX96)
/// returns (uint256 amountOut)
pub fn quote_exact_input_single_function() -> Function {
    quote_function("quoteExactInputSingle", "amountIn", "amountOut")
}

/// function quoteExactOutputSingle(address tokenIn, address tokenOut,
/// uint24 fee, uint256 amountOut, uint160 sqrtPriceLimitX96)
/// returns (uint256 amountIn)
pub fn quote_exact_output_single_function() -> Function {
    quote_function("quoteExactOutputSingle", "amountOut", "amountIn")
}

fn quote_function(name: &str, amount: &str, result: &str) -> Function {
    function(
        name,
        vec![
            param("tokenIn", ParamType::Address),
            param("tokenOut", ParamType::Address),
            param("fee", ParamType::Uint(24)),
            param(amount, ParamType::Uint(256)),
            param("sqrtPriceLimitX96", ParamType::Uint(160)),
        ],
        vec![param(result, ParamType::Uint(256))],
        // The quoter reverts internally to compute the result; callers must
        // use eth_call
        StateMutability::NonPayable,
    )
}

/// Encode a single-pool quote with no price limit.
///
/// `exact_input = true` quotes the output for `amount` of input; `false`
/// quotes the input required to receive `amount` of output.
pub fn encode_quote_single(
    token_in: Address,
    token_out: Address,
    fee: FeeTier,
    amount: U256,
    exact_input: bool,
) -> Result<Vec<u8>, AbiError> {
    let tokens = [
        Token::Address(token_in),
        Token::Address(token_out),
        Token::Uint(U256::from(fee.pips())),
        Token::Uint(amount),
        Token::Uint(U256::zero()),
    ];
    if exact_input {
        encode_call(
            &quote_exact_input_single_function(),
            "quoteExactInputSingle",
            &tokens,
        )
    } else {
        encode_call(
            &quote_exact_output_single_function(),
            "quoteExactOutputSingle",
            &tokens,
        )
    }
}

pub fn decode_quote(data: &[u8]) -> Result<U256, AbiError> {
    // Both quote functions return a single uint256
    let tokens = decode_return(
        &quote_exact_input_single_function(),
        "quoteExactInputSingle",
        data,
    )?;
    TokenReader::new(tokens).uint("quote")
}

// ---------------------------------------------------------------------------
// Swap router (V1)
// ---------------------------------------------------------------------------

fn exact_single_params() -> ParamType {
    ParamType::Tuple(vec![
        ParamType::Address,   // tokenIn
        ParamType::Address,   // tokenOut
        ParamType::Uint(24),  // fee
        ParamType::Address,   // recipient
        ParamType::Uint(256), // deadline
        ParamType::Uint(256), // amountIn | amountOut
        ParamType::Uint(256), // amountOutMinimum | amountInMaximum
        ParamType::Uint(160), // sqrtPriceLimitX96
    ])
}

/// function exactInputSingle((address tokenIn, address tokenOut, uint24 fee,
/// address recipient, uint256 deadline, uint256 amountIn,
/// uint256 amountOutMinimum, uint160 sqrtPriceLimitX96)) payable
/// returns (uint256 amountOut)
pub fn exact_input_single_function() -> Function {
    function(
        "exactInputSingle",
        vec![param("params", exact_single_params())],
        vec![param("amountOut", ParamType::Uint(256))],
        StateMutability::Payable,
    )
}

/// function exactOutputSingle((address tokenIn, address tokenOut, uint24 fee,
/// address recipient, uint256 deadline, uint256 amountOut,
/// uint256 amountInMaximum, uint160 sqrtPriceLimitX96)) payable
/// returns (uint256 amountIn)
pub fn exact_output_single_function() -> Function {
    function(
        "exactOutputSingle",
        vec![param("params", exact_single_params())],
        vec![param("amountIn", ParamType::Uint(256))],
        StateMutability::Payable,
    )
}

/// Arguments shared by `exactInputSingle` and `exactOutputSingle`.
///
/// `amount` is the fixed side (input for exact-input, output for
/// exact-output) and `amount_limit` the slippage bound on the other side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactSingleParams {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: FeeTier,
    pub recipient: Address,
    pub deadline: u64,
    pub amount: U256,
    pub amount_limit: U256,
    pub sqrt_price_limit_x96: U256,
}

impl ExactSingleParams {
    fn to_token(&self) -> Token {
        Token::Tuple(vec![
            Token::Address(self.token_in),
            Token::Address(self.token_out),
            Token::Uint(U256::from(self.fee.pips())),
            Token::Address(self.recipient),
            Token::Uint(U256::from(self.deadline)),
            Token::Uint(self.amount),
            Token::Uint(self.amount_limit),
            Token::Uint(self.sqrt_price_limit_x96),
        ])
    }

    fn from_reader(mut reader: TokenReader) -> Result<Self, AbiError> {
        let token_in = reader.address("tokenIn")?;
        let token_out = reader.address("tokenOut")?;
        let fee = reader.uint24("fee")?;
        let recipient = reader.address("recipient")?;
        let deadline = reader.uint("deadline")?;
        if deadline > U256::from(u64::MAX) {
            return Err(AbiError::ValueOverflow {
                field: "deadline",
                value: deadline,
                limit: "u64::MAX",
            });
        }
        Ok(Self {
            token_in,
            token_out,
            fee: FeeTier::new(fee).map_err(|_| AbiError::ValueOverflow {
                field: "fee",
                value: U256::from(fee),
                limit: "fee tier",
            })?,
            recipient,
            deadline: deadline.as_u64(),
            amount: reader.uint("amount")?,
            amount_limit: reader.uint("amountLimit")?,
            sqrt_price_limit_x96: reader.uint("sqrtPriceLimitX96")?,
        })
    }
}

pub fn encode_exact_input_single(params: &ExactSingleParams) -> Result<Vec<u8>, AbiError> {
    encode_call(
        &exact_input_single_function(),
        "exactInputSingle",
        &[params.to_token()],
    )
}

pub fn encode_exact_output_single(params: &ExactSingleParams) -> Result<Vec<u8>, AbiError> {
    encode_call(
        &exact_output_single_function(),
        "exactOutputSingle",
        &[params.to_token()],
    )
}

/// Decode `exactInputSingle` call data back into its arguments
pub fn decode_exact_input_single(data: &[u8]) -> Result<ExactSingleParams, AbiError> {
    let tokens = decode_call(&exact_input_single_function(), "exactInputSingle", data)?;
    ExactSingleParams::from_reader(TokenReader::new(tokens).tuple("params")?)
}

/// Decode `exactOutputSingle` call data back into its arguments
pub fn decode_exact_output_single(data: &[u8]) -> Result<ExactSingleParams, AbiError> {
    let tokens = decode_call(&exact_output_single_function(), "exactOutputSingle", data)?;
    ExactSingleParams::from_reader(TokenReader::new(tokens).tuple("params")?)
}

// ---------------------------------------------------------------------------
// Non-fungible position manager
// ---------------------------------------------------------------------------

/// function positions(uint256 tokenId) view returns (uint96 nonce,
/// address operator, address token0, address token1, uint24 fee,
/// int24 tickLower, int24 tickUpper, uint128 liquidity,
/// uint256 feeGrowthInside0LastX128, uint256 feeGrowthInside1LastX128,
/// uint128 tokensOwed0, uint128 tokensOwed1)
pub fn positions_function() -> Function {
    function(
        "positions",
        vec![param("tokenId", ParamType::Uint(256))],
        vec![
            param("nonce", ParamType::Uint(96)),
            param("operator", ParamType::Address),
            param("token0", ParamType::Address),
            param("token1", ParamType::Address),
            param("fee", ParamType::Uint(24)),
            param("tickLower", ParamType::Int(24)),
            param("tickUpper", ParamType::Int(24)),
            param("liquidity", ParamType::Uint(128)),
            param("feeGrowthInside0LastX128", ParamType::Uint(256)),
            param("feeGrowthInside1LastX128", ParamType::Uint(256)),
            param("tokensOwed0", ParamType::Uint(128)),
            param("tokensOwed1", ParamType::Uint(128)),
        ],
        StateMutability::View,
    )
}

/// function decreaseLiquidity((uint256 tokenId, uint128 liquidity,
/// uint256 amount0Min, uint256 amount1Min, uint256 deadline)) payable
/// returns (uint256 amount0, uint256 amount1)
pub fn decrease_liquidity_function() -> Function {
    function(
        "decreaseLiquidity",
        vec![param(
            "params",
            ParamType::Tuple(vec![
                ParamType::Uint(256),
                ParamType::Uint(128),
                ParamType::Uint(256),
                ParamType::Uint(256),
                ParamType::Uint(256),
            ]),
        )],
        vec![
            param("amount0", ParamType::Uint(256)),
            param("amount1", ParamType::Uint(256)),
        ],
        StateMutability::Payable,
    )
}

/// function collect((uint256 tokenId, address recipient, uint128 amount0Max,
/// uint128 amount1Max)) payable returns (uint256 amount0, uint256 amount1)
pub fn collect_function() -> Function {
    function(
        "collect",
        vec![param(
            "params",
            ParamType::Tuple(vec![
                ParamType::Uint(256),
                ParamType::Address,
                ParamType::Uint(128),
                ParamType::Uint(128),
            ]),
        )],
        vec![
            param("amount0", ParamType::Uint(256)),
            param("amount1", ParamType::Uint(256)),
        ],
        StateMutability::Payable,
    )
}

/// function multicall(bytes[] data) payable returns (bytes[] results)
pub fn multicall_function() -> Function {
    function(
        "multicall",
        vec![param("data", ParamType::Array(Box::new(ParamType::Bytes)))],
        vec![param(
            "results",
            ParamType::Array(Box::new(ParamType::Bytes)),
        )],
        StateMutability::Payable,
    )
}

pub fn encode_positions(token_id: U256) -> Result<Vec<u8>, AbiError> {
    encode_call(&positions_function(), "positions", &[Token::Uint(token_id)])
}

pub fn decode_positions(token_id: U256, data: &[u8]) -> Result<PositionRecord, AbiError> {
    let tokens = decode_return(&positions_function(), "positions", data)?;
    let mut reader = TokenReader::new(tokens);

    reader.skip("nonce")?;
    reader.skip("operator")?;
    let token0 = reader.address("token0")?;
    let token1 = reader.address("token1")?;
    let fee = reader.uint24("fee")?;
    let tick_lower = reader.int24("tickLower")?;
    let tick_upper = reader.int24("tickUpper")?;
    let liquidity = reader.uint128("liquidity")?;

    Ok(PositionRecord {
        token_id,
        liquidity,
        token0,
        token1,
        fee: FeeTier::new(fee).map_err(|_| AbiError::ValueOverflow {
            field: "fee",
            value: U256::from(fee),
            limit: "fee tier",
        })?,
        tick_lower,
        tick_upper,
    })
}

pub fn encode_decrease_liquidity(params: &RemovalParameters) -> Result<Vec<u8>, AbiError> {
    let tuple = Token::Tuple(vec![
        Token::Uint(params.token_id),
        Token::Uint(U256::from(params.liquidity)),
        Token::Uint(params.amount0_min),
        Token::Uint(params.amount1_min),
        Token::Uint(U256::from(params.deadline)),
    ]);
    encode_call(&decrease_liquidity_function(), "decreaseLiquidity", &[tuple])
}

pub fn encode_collect(params: &CollectParameters) -> Result<Vec<u8>, AbiError> {
    let tuple = Token::Tuple(vec![
        Token::Uint(params.token_id),
        Token::Address(params.recipient),
        Token::Uint(U256::from(params.amount0_max)),
        Token::Uint(U256::from(params.amount1_max)),
    ]);
    encode_call(&collect_function(), "collect", &[tuple])
}

pub fn encode_multicall(calls: Vec<Vec<u8>>) -> Result<Vec<u8>, AbiError> {
    let data = Token::Array(calls.into_iter().map(Token::Bytes).collect());
    encode_call(&multicall_function(), "multicall", &[data])
}

/// Split `multicall` call data into the inner calls
pub fn decode_multicall(data: &[u8]) -> Result<Vec<Vec<u8>>, AbiError> {
    let tokens = decode_call(&multicall_function(), "multicall", data)?;
    TokenReader::new(tokens).bytes_array("data")
}

/// Decode `decreaseLiquidity` call data back into its arguments
pub fn decode_decrease_liquidity(data: &[u8]) -> Result<RemovalParameters, AbiError> {
    let tokens = decode_call(&decrease_liquidity_function(), "decreaseLiquidity", data)?;
    let mut reader = TokenReader::new(tokens).tuple("params")?;

    let token_id = reader.uint("tokenId")?;
    let liquidity = reader.uint128("liquidity")?;
    let amount0_min = reader.uint("amount0Min")?;
    let amount1_min = reader.uint("amount1Min")?;
    let deadline = reader.uint("deadline")?;
    if deadline > U256::from(u64::MAX) {
        return Err(AbiError::ValueOverflow {
            field: "deadline",
            value: deadline,
            limit: "u64::MAX",
        });
    }

    Ok(RemovalParameters {
        token_id,
        liquidity,
        amount0_min,
        amount1_min,
        deadline: deadline.as_u64(),
    })
}

/// Decode `collect` call data back into its arguments
pub fn decode_collect(data: &[u8]) -> Result<CollectParameters, AbiError> {
    let tokens = decode_call(&collect_function(), "collect", data)?;
    let mut reader = TokenReader::new(tokens).tuple("params")?;

    Ok(CollectParameters {
        token_id: reader.uint("tokenId")?,
        recipient: reader.address("recipient")?,
        amount0_max: reader.uint128("amount0Max")?,
        amount1_max: reader.uint128("amount1Max")?,
    })
}
