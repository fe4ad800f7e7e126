//! In-memory chain used by the integration tests
//!
//! Read calls are answered from canned responses keyed by target address and
//! function selector. `allowance` and `approve` are simulated so approval
//! flows can be observed end to end.

#![allow(dead_code)]

use async_trait::async_trait;
use dex::abi::{erc20, uniswap_v3};
use ethers::abi::{decode, encode, ParamType, Token as AbiToken};
use ethers::types::{Address, Bytes, H256, U256};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use swap_amm::compute_pool_address;
use swap_config::protocol::{mainnet, tokens};
use swap_config::OrchestratorConfig;
use swap_orchestrator::{ChainClient, ChainError};
use types::{FeeTier, TransactionDescriptor};

pub type Selector = [u8; 4];

pub struct MockChain {
    chain_id: u64,
    signer: Option<Address>,
    responses: Mutex<HashMap<(Address, Selector), Vec<u8>>>,
    failing: Mutex<HashSet<(Address, Selector)>>,
    allowances: Mutex<HashMap<(Address, Address, Address), U256>>,
    calls: Mutex<Vec<(Address, Selector)>>,
    sent: Mutex<Vec<TransactionDescriptor>>,
    reject_sends: Mutex<bool>,
}

impl MockChain {
    pub fn new(signer: Option<Address>) -> Self {
        Self {
            chain_id: mainnet::CHAIN_ID,
            signer,
            responses: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
            allowances: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
            reject_sends: Mutex::new(false),
        }
    }

    pub fn respond(&self, to: Address, selector: Selector, tokens: &[AbiToken]) {
        self.responses
            .lock()
            .unwrap()
            .insert((to, selector), encode(tokens));
    }

    pub fn fail(&self, to: Address, selector: Selector) {
        self.failing.lock().unwrap().insert((to, selector));
    }

    /// Allowance of `token` granted by `owner` to `spender`
    pub fn set_allowance(&self, token: Address, owner: Address, spender: Address, amount: U256) {
        self.allowances
            .lock()
            .unwrap()
            .insert((token, owner, spender), amount);
    }

    pub fn allowance(&self, token: Address, owner: Address, spender: Address) -> U256 {
        self.allowances
            .lock()
            .unwrap()
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or_default()
    }

    pub fn reject_sends(&self) {
        *self.reject_sends.lock().unwrap() = true;
    }

    pub fn sent(&self) -> Vec<TransactionDescriptor> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self, to: Address, selector: Selector) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| **call == (to, selector))
            .count()
    }
}

fn selector_of(data: &[u8]) -> Selector {
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&data[..4]);
    selector
}

fn decode_address_pair(args: &[u8]) -> Result<(Address, Address), ChainError> {
    let tokens = decode(&[ParamType::Address, ParamType::Address], args)
        .map_err(|e| ChainError::Transport(e.to_string()))?;
    match tokens.as_slice() {
        [AbiToken::Address(a), AbiToken::Address(b)] => Ok((*a, *b)),
        _ => Err(ChainError::Transport("malformed allowance call".to_string())),
    }
}

/// Spender and amount of an `approve` call, `None` for any other call
pub fn decode_approve(data: &[u8]) -> Option<(Address, U256)> {
    if data.len() < 4 || selector_of(data) != erc20::approve_function().short_signature() {
        return None;
    }
    let tokens = decode(&[ParamType::Address, ParamType::Uint(256)], &data[4..]).ok()?;
    match tokens.as_slice() {
        [AbiToken::Address(spender), AbiToken::Uint(amount)] => Some((*spender, *amount)),
        _ => None,
    }
}

#[async_trait]
impl ChainClient for MockChain {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn signer_address(&self) -> Option<Address> {
        self.signer
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ChainError> {
        let selector = selector_of(&data);
        self.calls.lock().unwrap().push((to, selector));

        if self.failing.lock().unwrap().contains(&(to, selector)) {
            return Err(ChainError::Transport("execution reverted".to_string()));
        }
        if selector == erc20::allowance_function().short_signature() {
            let (owner, spender) = decode_address_pair(&data[4..])?;
            let allowance = self.allowance(to, owner, spender);
            return Ok(Bytes::from(encode(&[AbiToken::Uint(allowance)])));
        }
        self.responses
            .lock()
            .unwrap()
            .get(&(to, selector))
            .cloned()
            .map(Bytes::from)
            .ok_or_else(|| ChainError::Transport(format!("no response for {:?}", to)))
    }

    async fn send_transaction(&self, tx: &TransactionDescriptor) -> Result<H256, ChainError> {
        let signer = self.signer.ok_or(ChainError::MissingSigner)?;
        let tx_hash = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(tx.clone());
            H256::from_low_u64_be(sent.len() as u64)
        };

        if *self.reject_sends.lock().unwrap() {
            return Err(ChainError::Reverted { tx_hash });
        }

        if let Some((spender, amount)) = decode_approve(&tx.data) {
            self.set_allowance(tx.to, signer, spender, amount);
        }
        Ok(tx_hash)
    }
}

pub fn owner() -> Address {
    Address::repeat_byte(0x42)
}

pub fn config() -> OrchestratorConfig {
    let mut config = OrchestratorConfig::default();
    config.network.wallet_address = Some(owner());
    config
}

pub fn usdc_weth_pool(config: &OrchestratorConfig, fee: FeeTier) -> Address {
    compute_pool_address(
        config.protocol.factory,
        tokens::USDC,
        tokens::WETH,
        fee,
        config.protocol.pool_init_code_hash,
    )
    .unwrap()
}

/// Register token metadata for USDC and WETH
pub fn seed_tokens(chain: &MockChain) {
    let decimals = erc20::decimals_function().short_signature();
    let symbol = erc20::symbol_function().short_signature();

    chain.respond(tokens::USDC, decimals, &[AbiToken::Uint(U256::from(6))]);
    chain.respond(tokens::USDC, symbol, &[AbiToken::String("USDC".into())]);
    chain.respond(tokens::WETH, decimals, &[AbiToken::Uint(U256::from(18))]);
    chain.respond(tokens::WETH, symbol, &[AbiToken::String("WETH".into())]);
}

/// Register fee, liquidity and slot0 for `pool`
pub fn seed_pool(chain: &MockChain, pool: Address, fee: u32, tick: i32) {
    let tick_word = if tick < 0 {
        U256::MAX - U256::from((-(tick as i64) - 1) as u64)
    } else {
        U256::from(tick as u64)
    };

    chain.respond(
        pool,
        uniswap_v3::fee_function().short_signature(),
        &[AbiToken::Uint(U256::from(fee))],
    );
    chain.respond(
        pool,
        uniswap_v3::liquidity_function().short_signature(),
        &[AbiToken::Uint(U256::from(10_000_000_000_000_000_000u128))],
    );
    chain.respond(
        pool,
        uniswap_v3::slot0_function().short_signature(),
        &[
            AbiToken::Uint(U256::from_dec_str("1584563250285286751870879006720000").unwrap()),
            AbiToken::Int(tick_word),
            AbiToken::Uint(U256::from(1)),
            AbiToken::Uint(U256::from(1)),
            AbiToken::Uint(U256::from(1)),
            AbiToken::Uint(U256::zero()),
            AbiToken::Bool(true),
        ],
    );
}

/// Fix the quoter's answer in one direction
pub fn seed_quote(chain: &MockChain, config: &OrchestratorConfig, exact_input: bool, quoted: U256) {
    let selector = if exact_input {
        uniswap_v3::quote_exact_input_single_function().short_signature()
    } else {
        uniswap_v3::quote_exact_output_single_function().short_signature()
    };
    chain.respond(config.protocol.quoter, selector, &[AbiToken::Uint(quoted)]);
}

/// Chain with tokens and the USDC/WETH 0.3% pool registered
pub fn seeded_chain(signer: Option<Address>) -> (Arc<MockChain>, OrchestratorConfig) {
    let config = config();
    let chain = Arc::new(MockChain::new(signer));
    seed_tokens(&chain);
    seed_pool(&chain, usdc_weth_pool(&config, FeeTier::MEDIUM), 3000, 198_080);
    (chain, config)
}
