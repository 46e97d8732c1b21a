//! Sollet swap client - command line entry point
//!
//! `sollet-swap get <path>` queries the swap API and prints the decoded result.
//! `sollet-swap swap <market> <source> <destination> <amount>` submits an
//! OpenBook V2 swap for the configured wallet and prints its signature.
use anyhow::{anyhow, Context};
use dotenv::dotenv;
use log::info;
use serde_json::Value;
use solana_sdk::signature::Signer;
use sollet_swap_client::{
    use_swap_api_get, AppConfig, AsyncDataOptions, AsyncDataSource, OpenbookSwapper, RpcProvider,
    SwapApiClient,
};
use std::env;
use std::sync::Arc;

const USAGE: &str = "usage:
  sollet-swap get <path>
  sollet-swap swap <market> <source-token-account> <destination-token-account> <amount>";

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting sollet swap client v{}", sollet_swap_client::VERSION);

    let config = AppConfig::load().context("Failed to load configuration")?;
    let args: Vec<String> = env::args().skip(1).collect();

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["get", path] => run_get(&config, path).await,
        ["swap", market, source, destination, amount] => {
            let amount: u64 = amount
                .parse()
                .map_err(|_| anyhow!("Invalid amount: {}", amount))?;
            run_swap(&config, market, source, destination, amount).await
        }
        _ => Err(anyhow!(USAGE)),
    }
}

async fn run_get(config: &AppConfig, path: &str) -> anyhow::Result<()> {
    let client = Arc::new(SwapApiClient::new(config.swap_api()));
    info!("Querying swap API at {}", client.config().url_for(path));

    let result = use_swap_api_get(client, Some(path), AsyncDataOptions::default())
        .fetch()
        .await?;
    let value = result.unwrap_or(Value::Null);

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

async fn run_swap(
    config: &AppConfig,
    market: &str,
    source: &str,
    destination: &str,
    amount: u64,
) -> anyhow::Result<()> {
    let keypair = config.wallet_keypair()?;
    let user_wallet = keypair.pubkey().to_string();

    let program = config.program_handle()?;

    info!("Connecting to Solana network at {}", config.solana_rpc_url);
    let provider = Arc::new(RpcProvider::connect(&config.solana_rpc_url, keypair));
    let swapper = OpenbookSwapper::new(program, provider);

    let signature = swapper
        .swap_on_openbook_v2(&user_wallet, market, source, destination, amount)
        .await?;

    println!("{}", signature);
    Ok(())
}
