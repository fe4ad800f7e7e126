//! Swap orchestrator command-line entry point
//!
//! Prepares swaps and partial withdrawals against the configured deployment
//! and prints the resulting descriptors as JSON. Nothing is broadcast unless
//! `--submit` is given.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ethers::types::{Address, U256};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use swap_amm::{from_readable_amount, to_readable_amount};
use swap_config::OrchestratorConfig;
use swap_orchestrator::{
    log_error, log_network, ChainClient, EthersChainClient, SwapMode,
    SwapOrchestrator, SwapRequest, TransactionSubmitter, WithdrawalPlanner,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use types::{FeeTier, TransactionDescriptor};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive a pool address and read its current state
    Pool {
        #[arg(long)]
        token_a: String,
        #[arg(long)]
        token_b: String,
        /// Fee tier in hundredths of a basis point (3000 = 0.3%)
        #[arg(long, default_value_t = 3000)]
        fee: u32,
    },

    /// Show a wallet's balance of a token
    Balance {
        #[arg(long)]
        token: String,
        /// Defaults to the configured wallet
        #[arg(long)]
        owner: Option<String>,
    },

    /// Quote, approve and encode a single-hop swap
    Swap {
        #[arg(long)]
        token_in: String,
        #[arg(long)]
        token_out: String,
        #[arg(long, default_value_t = 3000)]
        fee: u32,
        /// Fix the output amount instead of the input amount
        #[arg(long)]
        exact_output: bool,
        /// Fixed side of the trade, in whole tokens ("1.5")
        #[arg(long)]
        amount: String,
        /// Minimum output (exact input) or maximum input (exact output), in
        /// whole tokens; unbounded when omitted
        #[arg(long)]
        limit: Option<String>,
        #[arg(long)]
        recipient: Option<String>,
        /// Sign and broadcast the swap after preparing it
        #[arg(long)]
        submit: bool,
    },

    /// Encode the partial withdrawal of a liquidity position
    RemoveLiquidity {
        #[arg(long)]
        token_id: u64,
        /// Share to remove, against the configured denominator (5000 = 50%)
        #[arg(long)]
        share: u32,
        #[arg(long)]
        recipient: Option<String>,
        #[arg(long)]
        submit: bool,
    },

    /// Print the effective configuration
    ShowConfig {
        #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn as_str(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = OrchestratorConfig::load(args.config.as_deref())?;
    config.validate().context("Invalid configuration")?;

    if let Err(e) = run(args.command, config).await {
        log_error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

async fn run(command: Command, config: OrchestratorConfig) -> Result<()> {
    if let Command::ShowConfig { format } = &command {
        println!("{}", config.to_pretty_string(Some(format.as_str()))?);
        return Ok(());
    }

    let client = EthersChainClient::connect(&config.network)
        .await
        .context("Failed to connect to RPC endpoint")?;
    log_network!("Chain {} ready", client.chain_id());

    let client: Arc<dyn ChainClient> = Arc::new(client);
    let config = Arc::new(config);

    match command {
        Command::Pool {
            token_a,
            token_b,
            fee,
        } => {
            let orchestrator = SwapOrchestrator::new(client, config);
            let pool = orchestrator
                .load_pool(
                    parse_address(&token_a)?,
                    parse_address(&token_b)?,
                    FeeTier::new(fee)?,
                )
                .await?;
            print_json(&pool)?;
        }

        Command::Balance { token, owner } => {
            let orchestrator = SwapOrchestrator::new(client, config);
            let owner = match owner {
                Some(owner) => parse_address(&owner)?,
                None => orchestrator.owner()?,
            };
            let token = orchestrator.tokens().resolve(parse_address(&token)?).await?;
            let balance = orchestrator.tokens().balance_of(&token, owner).await?;
            println!(
                "{} {}",
                to_readable_amount(balance, token.decimals())?,
                token.symbol()
            );
        }

        Command::Swap {
            token_in,
            token_out,
            fee,
            exact_output,
            amount,
            limit,
            recipient,
            submit,
        } => {
            let orchestrator = SwapOrchestrator::new(client.clone(), config);
            let token_in = parse_address(&token_in)?;
            let token_out = parse_address(&token_out)?;
            let (input, output) = orchestrator.tokens().resolve_pair(token_in, token_out).await?;

            let mode = if exact_output {
                SwapMode::ExactOutput {
                    amount_out: from_readable_amount(&amount, output.decimals())?,
                    amount_in_maximum: match limit {
                        Some(limit) => from_readable_amount(&limit, input.decimals())?,
                        None => U256::MAX,
                    },
                }
            } else {
                SwapMode::ExactInput {
                    amount_in: from_readable_amount(&amount, input.decimals())?,
                    amount_out_minimum: match limit {
                        Some(limit) => from_readable_amount(&limit, output.decimals())?,
                        None => U256::zero(),
                    },
                }
            };

            let request = SwapRequest {
                token_in,
                token_out,
                fee: FeeTier::new(fee)?,
                mode,
                recipient: recipient.as_deref().map(parse_address).transpose()?,
            };
            let prepared = orchestrator
                .build_swap_with_tokens(&request, input, output)
                .await?;
            print_json(&prepared)?;

            if submit {
                submit_transaction(client, &prepared.transaction).await?;
            }
        }

        Command::RemoveLiquidity {
            token_id,
            share,
            recipient,
            submit,
        } => {
            let planner = WithdrawalPlanner::new(client.clone(), config);
            let plan = planner
                .prepare_withdrawal(
                    U256::from(token_id),
                    share,
                    recipient.as_deref().map(parse_address).transpose()?,
                )
                .await?;
            print_json(&plan)?;

            if submit {
                submit_transaction(client, &plan.transaction).await?;
            }
        }

        Command::ShowConfig { .. } => {}
    }

    Ok(())
}

async fn submit_transaction(client: Arc<dyn ChainClient>, tx: &TransactionDescriptor) -> Result<()> {
    info!("Submitting transaction to {:?}", tx.to);
    let tx_hash = TransactionSubmitter::new(client).submit(tx).await?;
    println!("{:?}", tx_hash);
    Ok(())
}

fn parse_address(text: &str) -> Result<Address> {
    let address: Address = text
        .parse()
        .with_context(|| format!("Invalid address: {}", text))?;
    if address.is_zero() {
        bail!("Address must not be zero: {}", text);
    }
    Ok(address)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to render JSON")?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show_config_format(argv: &[&str]) -> Result<ConfigFormat, clap::Error> {
        match Args::try_parse_from(argv)?.command {
            Command::ShowConfig { format } => Ok(format),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_show_config_formats() {
        assert_eq!(
            show_config_format(&["swap_orchestrator", "show-config"]).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            show_config_format(&["swap_orchestrator", "show-config", "--format", "json"]).unwrap(),
            ConfigFormat::Json
        );
        assert!(show_config_format(&["swap_orchestrator", "show-config", "--format", "yaml"]).is_err());
    }
}
