//! End-to-end swap construction against the in-memory chain

mod common;

use common::{decode_approve, owner, seed_pool, seed_quote, seeded_chain, usdc_weth_pool, MockChain};
use dex::abi::{erc20, uniswap_v3};
use ethers::types::{Address, U256};
use std::sync::Arc;
use swap_config::protocol::tokens;
use swap_config::OrchestratorConfig;
use swap_orchestrator::{
    ApprovalOutcome, ChainClient, SwapError, SwapMode, SwapOrchestrator, SwapRequest,
};
use types::{FeeTier, TradeType, ValidationError};

fn orchestrator(chain: &Arc<MockChain>, config: &OrchestratorConfig) -> SwapOrchestrator {
    let client: Arc<dyn ChainClient> = chain.clone();
    SwapOrchestrator::new(client, Arc::new(config.clone()))
}

fn one_weth() -> U256 {
    U256::exp10(18)
}

fn sell_weth(amount_out_minimum: U256) -> SwapRequest {
    SwapRequest {
        token_in: tokens::WETH,
        token_out: tokens::USDC,
        fee: FeeTier::MEDIUM,
        mode: SwapMode::ExactInput {
            amount_in: one_weth(),
            amount_out_minimum,
        },
        recipient: None,
    }
}

fn buy_usdc(amount_out: U256, amount_in_maximum: U256) -> SwapRequest {
    SwapRequest {
        token_in: tokens::WETH,
        token_out: tokens::USDC,
        fee: FeeTier::MEDIUM,
        mode: SwapMode::ExactOutput {
            amount_out,
            amount_in_maximum,
        },
        recipient: None,
    }
}

#[tokio::test]
async fn test_exact_input_swap_is_approved_and_encoded() {
    let (chain, config) = seeded_chain(Some(owner()));
    seed_quote(&chain, &config, true, U256::from(2_000_000_000u64));

    let prepared = orchestrator(&chain, &config)
        .build_swap(&sell_weth(U256::from(1_900_000_000u64)))
        .await
        .unwrap();

    assert_eq!(prepared.trade.trade_type(), TradeType::ExactInput);
    assert_eq!(prepared.trade.input_amount(), one_weth());
    assert_eq!(prepared.trade.output_amount(), U256::from(2_000_000_000u64));
    assert!(matches!(
        prepared.approval,
        ApprovalOutcome::Approved { amount, .. } if amount == one_weth()
    ));

    let tx = &prepared.transaction;
    assert_eq!(tx.to, config.protocol.swap_router);
    assert!(tx.value.is_zero());
    assert_eq!(tx.max_fee_per_gas, U256::from(100_000_000_000u64));
    assert_eq!(tx.max_priority_fee_per_gas, U256::from(100_000_000_000u64));

    let params = uniswap_v3::decode_exact_input_single(&tx.data).unwrap();
    assert_eq!(params.token_in, tokens::WETH);
    assert_eq!(params.token_out, tokens::USDC);
    assert_eq!(params.fee, FeeTier::MEDIUM);
    assert_eq!(params.recipient, owner());
    assert_eq!(params.amount, one_weth());
    // 2_000_000_000 / 1.01, floored
    assert_eq!(params.amount_limit, U256::from(1_980_198_019u64));
    assert!(params.sqrt_price_limit_x96.is_zero());

    // approve is the only transaction sent; the swap itself is left unsigned
    let sent = chain.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, tokens::WETH);
    assert_eq!(
        decode_approve(&sent[0].data),
        Some((config.protocol.swap_router, one_weth()))
    );
    assert_eq!(
        chain.allowance(tokens::WETH, owner(), config.protocol.swap_router),
        one_weth()
    );
    assert!(chain
        .allowance(tokens::WETH, owner(), config.protocol.quoter)
        .is_zero());
}

#[tokio::test]
async fn test_allowance_for_another_spender_does_not_count() {
    let (chain, config) = seeded_chain(Some(owner()));
    seed_quote(&chain, &config, true, U256::from(2_000_000_000u64));
    chain.set_allowance(tokens::WETH, owner(), config.protocol.quoter, U256::MAX);
    chain.set_allowance(
        tokens::WETH,
        Address::repeat_byte(0x55),
        config.protocol.swap_router,
        U256::MAX,
    );

    let prepared = orchestrator(&chain, &config)
        .build_swap(&sell_weth(U256::zero()))
        .await
        .unwrap();

    assert!(matches!(prepared.approval, ApprovalOutcome::Approved { .. }));
    let sent = chain.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        decode_approve(&sent[0].data),
        Some((config.protocol.swap_router, one_weth()))
    );
}

#[tokio::test]
async fn test_quote_below_minimum_fails_before_approval() {
    let (chain, config) = seeded_chain(Some(owner()));
    seed_quote(&chain, &config, true, U256::from(1_000u64));

    let result = orchestrator(&chain, &config)
        .build_swap(&sell_weth(U256::from(1_001u64)))
        .await;

    match result {
        Err(SwapError::InsufficientOutput { quoted, minimum }) => {
            assert_eq!(quoted, U256::from(1_000u64));
            assert_eq!(minimum, U256::from(1_001u64));
        }
        other => panic!("expected InsufficientOutput, got {:?}", other),
    }
    assert!(chain.sent().is_empty());
    assert_eq!(
        chain.call_count(tokens::WETH, erc20::allowance_function().short_signature()),
        0
    );
}

#[tokio::test]
async fn test_quote_equal_to_minimum_is_accepted() {
    let (chain, config) = seeded_chain(Some(owner()));
    seed_quote(&chain, &config, true, U256::from(1_000u64));

    let prepared = orchestrator(&chain, &config)
        .build_swap(&sell_weth(U256::from(1_000u64)))
        .await
        .unwrap();
    assert_eq!(prepared.trade.output_amount(), U256::from(1_000u64));
}

#[tokio::test]
async fn test_exact_output_approves_buffered_quote() {
    let (chain, config) = seeded_chain(Some(owner()));
    seed_quote(&chain, &config, false, U256::from(150u64));

    let prepared = orchestrator(&chain, &config)
        .build_swap(&buy_usdc(U256::from(300_000u64), U256::from(200u64)))
        .await
        .unwrap();

    assert_eq!(prepared.trade.trade_type(), TradeType::ExactOutput);
    assert_eq!(prepared.trade.input_amount(), U256::from(150u64));
    // ceil(150 * 1.01)
    assert!(matches!(
        prepared.approval,
        ApprovalOutcome::Approved { amount, .. } if amount == U256::from(152u64)
    ));

    let params = uniswap_v3::decode_exact_output_single(&prepared.transaction.data).unwrap();
    assert_eq!(params.amount, U256::from(300_000u64));
    assert_eq!(params.amount_limit, U256::from(151u64));
}

#[tokio::test]
async fn test_quote_above_maximum_input_fails() {
    let (chain, config) = seeded_chain(Some(owner()));
    seed_quote(&chain, &config, false, U256::from(250u64));

    let result = orchestrator(&chain, &config)
        .build_swap(&buy_usdc(U256::from(300_000u64), U256::from(200u64)))
        .await;

    assert!(matches!(
        result,
        Err(SwapError::InsufficientInput { quoted, maximum })
            if quoted == U256::from(250u64) && maximum == U256::from(200u64)
    ));
    assert!(chain.sent().is_empty());
}

#[tokio::test]
async fn test_zero_input_needs_no_approval() {
    let (chain, config) = seeded_chain(Some(owner()));
    seed_quote(&chain, &config, true, U256::zero());

    let mut request = sell_weth(U256::zero());
    request.mode = SwapMode::ExactInput {
        amount_in: U256::zero(),
        amount_out_minimum: U256::zero(),
    };
    let prepared = orchestrator(&chain, &config)
        .build_swap(&request)
        .await
        .unwrap();

    assert_eq!(
        prepared.approval,
        ApprovalOutcome::AlreadySufficient {
            allowance: U256::zero()
        }
    );
    assert!(chain.sent().is_empty());
}

#[tokio::test]
async fn test_repeated_build_approves_once() {
    let (chain, config) = seeded_chain(Some(owner()));
    seed_quote(&chain, &config, true, U256::from(2_000_000_000u64));
    let orchestrator = orchestrator(&chain, &config);

    let first = orchestrator.build_swap(&sell_weth(U256::zero())).await.unwrap();
    let second = orchestrator.build_swap(&sell_weth(U256::zero())).await.unwrap();

    assert!(matches!(first.approval, ApprovalOutcome::Approved { .. }));
    assert_eq!(
        second.approval,
        ApprovalOutcome::AlreadySufficient {
            allowance: one_weth()
        }
    );
    assert_eq!(chain.sent().len(), 1);
}

#[tokio::test]
async fn test_existing_allowance_is_left_alone() {
    let (chain, config) = seeded_chain(Some(owner()));
    seed_quote(&chain, &config, true, U256::from(2_000_000_000u64));
    chain.set_allowance(tokens::WETH, owner(), config.protocol.swap_router, U256::MAX);

    let prepared = orchestrator(&chain, &config)
        .build_swap(&sell_weth(U256::zero()))
        .await
        .unwrap();

    assert_eq!(
        prepared.approval,
        ApprovalOutcome::AlreadySufficient {
            allowance: U256::MAX
        }
    );
    assert!(chain.sent().is_empty());
}

#[tokio::test]
async fn test_read_only_client_cannot_approve() {
    let (chain, config) = seeded_chain(None);
    seed_quote(&chain, &config, true, U256::from(2_000_000_000u64));

    let result = orchestrator(&chain, &config)
        .build_swap(&sell_weth(U256::zero()))
        .await;

    assert!(matches!(result, Err(SwapError::Configuration(_))));
    assert!(chain.sent().is_empty());
}

#[tokio::test]
async fn test_missing_wallet_is_a_configuration_error() {
    let (chain, mut config) = seeded_chain(None);
    config.network.wallet_address = None;
    seed_quote(&chain, &config, true, U256::from(2_000_000_000u64));

    let result = orchestrator(&chain, &config)
        .build_swap(&sell_weth(U256::zero()))
        .await;

    assert!(matches!(result, Err(SwapError::Configuration(_))));
}

#[tokio::test]
async fn test_pool_read_failure_is_reported() {
    let (chain, config) = seeded_chain(Some(owner()));
    seed_quote(&chain, &config, true, U256::from(2_000_000_000u64));
    let pool = usdc_weth_pool(&config, FeeTier::MEDIUM);
    chain.fail(pool, uniswap_v3::slot0_function().short_signature());

    let result = orchestrator(&chain, &config)
        .build_swap(&sell_weth(U256::zero()))
        .await;

    assert!(matches!(
        result,
        Err(SwapError::PoolStateUnavailable { pool: reported, .. }) if reported == pool
    ));
    assert!(chain.sent().is_empty());
}

#[tokio::test]
async fn test_quoter_failure_is_reported() {
    let (chain, config) = seeded_chain(Some(owner()));
    chain.fail(
        config.protocol.quoter,
        uniswap_v3::quote_exact_input_single_function().short_signature(),
    );

    let result = orchestrator(&chain, &config)
        .build_swap(&sell_weth(U256::zero()))
        .await;

    assert!(matches!(
        result,
        Err(SwapError::QuoteUnavailable { token_in, token_out, .. })
            if token_in == tokens::WETH && token_out == tokens::USDC
    ));
}

#[tokio::test]
async fn test_failed_approval_is_surfaced() {
    let (chain, config) = seeded_chain(Some(owner()));
    seed_quote(&chain, &config, true, U256::from(2_000_000_000u64));
    chain.reject_sends();

    let result = orchestrator(&chain, &config)
        .build_swap(&sell_weth(U256::zero()))
        .await;

    assert!(matches!(
        result,
        Err(SwapError::ApprovalFailed { token, .. }) if token == tokens::WETH
    ));
    assert!(chain
        .allowance(tokens::WETH, owner(), config.protocol.swap_router)
        .is_zero());
}

#[tokio::test]
async fn test_identical_tokens_rejected_before_any_read() {
    let (chain, config) = seeded_chain(Some(owner()));
    let mut request = sell_weth(U256::zero());
    request.token_out = tokens::WETH;

    let result = orchestrator(&chain, &config).build_swap(&request).await;

    assert!(matches!(
        result,
        Err(SwapError::InvalidInput(ValidationError::IdenticalTokens))
    ));
    assert_eq!(
        chain.call_count(tokens::WETH, erc20::decimals_function().short_signature()),
        0
    );
}

#[tokio::test]
async fn test_explicit_recipient_receives_output() {
    let (chain, config) = seeded_chain(Some(owner()));
    seed_quote(&chain, &config, true, U256::from(2_000_000_000u64));
    let recipient = Address::repeat_byte(0x77);

    let mut request = sell_weth(U256::zero());
    request.recipient = Some(recipient);
    let prepared = orchestrator(&chain, &config)
        .build_swap(&request)
        .await
        .unwrap();

    let params = uniswap_v3::decode_exact_input_single(&prepared.transaction.data).unwrap();
    assert_eq!(params.recipient, recipient);
}

#[tokio::test]
async fn test_pool_reporting_other_fee_is_rejected() {
    let (chain, config) = seeded_chain(Some(owner()));
    seed_quote(&chain, &config, true, U256::from(2_000_000_000u64));
    let low_pool = usdc_weth_pool(&config, FeeTier::LOW);
    seed_pool(&chain, low_pool, 3000, 198_080);

    let mut request = sell_weth(U256::zero());
    request.fee = FeeTier::LOW;
    let result = orchestrator(&chain, &config).build_swap(&request).await;

    assert!(matches!(
        result,
        Err(SwapError::PoolStateUnavailable { pool, .. }) if pool == low_pool
    ));
}

#[tokio::test]
async fn test_load_pool_sorts_tokens() {
    let (chain, config) = seeded_chain(Some(owner()));

    let pool = orchestrator(&chain, &config)
        .load_pool(tokens::WETH, tokens::USDC, FeeTier::MEDIUM)
        .await
        .unwrap();

    // USDC (0xA0b8...) sorts before WETH (0xC02a...)
    assert_eq!(pool.token0().symbol(), "USDC");
    assert_eq!(pool.token1().symbol(), "WETH");
    assert_eq!(pool.address(), usdc_weth_pool(&config, FeeTier::MEDIUM));
    assert_eq!(pool.state().tick(), 198_080);
    assert_eq!(pool.state().fee(), FeeTier::MEDIUM);
}

#[tokio::test]
async fn test_pre_resolved_tokens_are_not_read_again() {
    let (chain, config) = seeded_chain(Some(owner()));
    seed_quote(&chain, &config, true, U256::from(2_000_000_000u64));
    let orchestrator = orchestrator(&chain, &config);

    let (weth, usdc) = orchestrator
        .tokens()
        .resolve_pair(tokens::WETH, tokens::USDC)
        .await
        .unwrap();
    let prepared = orchestrator
        .build_swap_with_tokens(&sell_weth(U256::zero()), weth, usdc)
        .await
        .unwrap();

    assert_eq!(prepared.trade.output_amount(), U256::from(2_000_000_000u64));
    let decimals = erc20::decimals_function().short_signature();
    assert_eq!(chain.call_count(tokens::WETH, decimals), 1);
    assert_eq!(chain.call_count(tokens::USDC, decimals), 1);
}

#[tokio::test]
async fn test_pre_resolved_tokens_must_match_request() {
    let (chain, config) = seeded_chain(Some(owner()));
    seed_quote(&chain, &config, true, U256::from(2_000_000_000u64));
    let orchestrator = orchestrator(&chain, &config);

    let (weth, usdc) = orchestrator
        .tokens()
        .resolve_pair(tokens::WETH, tokens::USDC)
        .await
        .unwrap();
    let result = orchestrator
        .build_swap_with_tokens(&sell_weth(U256::zero()), usdc, weth)
        .await;

    assert!(matches!(
        result,
        Err(SwapError::InvalidInput(ValidationError::RouteMismatch { .. }))
    ));
    assert!(chain.sent().is_empty());
}
