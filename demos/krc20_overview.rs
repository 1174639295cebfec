/// Example showing the main KRC-20 queries against a live Kasplex indexer
///
/// This example shows how to:
/// 1. Build a client for mainnet or testnet from configuration
/// 2. Look up a token and its largest holders
/// 3. Walk the first pages of the token list using cursors
/// 4. Inspect an address's balances and recent operations
///
/// Run with:
/// ```bash
/// KASPLEX_NETWORK=mainnet \
/// TICK=NACHO \
/// ADDRESS=kaspa:qz... \
/// cargo run --package kasplex --example krc20_overview
/// ```
use anyhow::{Context, Result};
use kasplex::{KasplexClient, KasplexConfigBuilder, Network, OpListParams, PageParams};
use std::env;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const PAGES: usize = 2;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    dotenvy::dotenv().ok();

    let network: Network = env::var("KASPLEX_NETWORK")
        .unwrap_or_else(|_| "mainnet".to_string())
        .parse()
        .context("Failed to parse KASPLEX_NETWORK")?;
    let tick = env::var("TICK").unwrap_or_else(|_| "NACHO".to_string());
    let address = env::var("ADDRESS").ok();

    let config = KasplexConfigBuilder::new(network)
        .timeout(Duration::from_secs(20))
        .build();
    let client = KasplexClient::from_config(config).context("Failed to build client")?;

    info!(%network, base_url = client.base_url(), "Querying Kasplex");

    let token = client
        .get_token_info(&tick)
        .await
        .with_context(|| format!("Failed to fetch token {tick}"))?
        .result;
    info!(
        tick = %token.tick,
        max = %token.max,
        minted = %token.minted,
        holders = %token.holder_total,
        "Token info"
    );
    for holder in token.holder.iter().flatten().take(5) {
        info!(address = %holder.address, amount = %holder.amount, "Holder");
    }

    let mut params = PageParams::default();
    for page_number in 1..=PAGES {
        let page = client.get_token_list(&params).await?;
        info!(page = page_number, tokens = page.result.len(), "Token list page");
        for entry in &page.result {
            info!(tick = %entry.tick, state = ?entry.state, minted = %entry.minted, "Token");
        }
        match page.next {
            Some(cursor) if !cursor.is_empty() => params = PageParams::next(cursor),
            _ => break,
        }
    }

    if let Some(address) = address {
        let balances = client
            .get_token_list_of_address(&address, &PageParams::default())
            .await?;
        for balance in &balances.result {
            info!(
                tick = %balance.tick,
                balance = %balance.balance,
                locked = %balance.locked,
                "Balance"
            );
        }

        let params = OpListParams::new()
            .with_address(address.as_str())
            .with_tick(tick.as_str());
        let ops = client.get_op_list(&params).await?;
        for op in &ops.result {
            info!(
                op = %op.op,
                hash = %op.hash_rev,
                amount = ?op.amt,
                accepted = op.is_accepted(),
                "Operation"
            );
        }
    }

    Ok(())
}
