//! Prints the wallet's recent transaction history as a table: direction,
//! method label, value in DEV, gas price, date, block.

use anyhow::{Context, Result};
use chrono::Local;
use dotenv::dotenv;
use std::env;
use tracing_subscriber::EnvFilter;

use rugbycv_engine::config::Config;
use rugbycv_engine::explorer::ExplorerClient;
use rugbycv_engine::history::RawTransaction;
use rugbycv_engine::selector::{
    derive_selector, APPLY_TO_JOB_SIGNATURE, CREATE_PROFILE_SELECTOR, POST_JOB_SIGNATURE,
};

const MAX_ROWS: usize = 20;

fn log(msg: &str) {
    println!("[{}] {}", Local::now().format("%H:%M:%S"), msg);
}

fn function_label(tx: &RawTransaction, config: &Config) -> String {
    let method_id = tx.method_id().to_lowercase();
    let product_methods = [
        (CREATE_PROFILE_SELECTOR.to_string(), "Create Profile"),
        (derive_selector(POST_JOB_SIGNATURE), "Post Job"),
        (derive_selector(APPLY_TO_JOB_SIGNATURE), "Apply To Job"),
    ];
    for (selector, label) in product_methods {
        if method_id == selector {
            return label.to_string();
        }
    }
    match method_id.as_str() {
        "0xa9059cbb" => "Transfer".to_string(),
        "0x095ea7b3" => "Approve".to_string(),
        "0x23b872dd" => "TransferFrom".to_string(),
        "0x6a627842" => "Mint".to_string(),
        "0x4e71d92d" => "Burn".to_string(),
        "0x" | "" => "Transfer DEV".to_string(),
        _ => match tx.to.as_deref() {
            Some(to) if to.eq_ignore_ascii_case(&config.profile_address.to_string()) => {
                "Profile Contract".to_string()
            }
            Some(to) if to.eq_ignore_ascii_case(&config.job_board_address.to_string()) => {
                "Job Board".to_string()
            }
            _ => "Contract Interaction".to_string(),
        },
    }
}

fn direction(tx: &RawTransaction, wallet: &str) -> &'static str {
    match tx.to.as_deref() {
        None | Some("") | Some("0x0000000000000000000000000000000000000000") => "contract",
        Some(_) if tx.from.eq_ignore_ascii_case(wallet) => "sent",
        Some(_) => "received",
    }
}

fn format_dev(wei: &str) -> String {
    format!("{:.4}", wei.parse::<f64>().unwrap_or(0.0) / 1e18)
}

fn format_gwei(wei: &str) -> String {
    format!("{:.2}", wei.parse::<f64>().unwrap_or(0.0) / 1e9)
}

fn format_date(tx: &RawTransaction) -> String {
    tx.timestamp()
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let wallet = env::args()
        .nth(1)
        .or_else(|| env::var("WALLET_ADDRESS").ok())
        .context("Pass a wallet address as the first argument or set WALLET_ADDRESS")?;

    log(&format!("📜 Transaction history for {}", wallet));

    let explorer = ExplorerClient::new(&config.explorer_api_url, &config.explorer_api_key)?;
    let transactions = explorer.fetch_tx_history(&wallet).await?;

    if transactions.is_empty() {
        log("No transactions found. They may take a moment to appear on Moonscan.");
        return Ok(());
    }

    println!();
    println!(
        "{:<10} {:<20} {:>12} {:>12} {:<12} {:>10}  {}",
        "Type", "Function", "DEV", "Gwei", "Date", "Block", "Hash"
    );
    println!("{}", "─".repeat(110));

    for tx in transactions.iter().take(MAX_ROWS) {
        println!(
            "{:<10} {:<20} {:>12} {:>12} {:<12} {:>10}  {}/tx/{}",
            direction(tx, &wallet),
            function_label(tx, &config),
            format_dev(&tx.value),
            format_gwei(&tx.gas_price),
            format_date(tx),
            tx.block_number,
            config.explorer_base_url,
            tx.hash
        );
    }

    println!();
    log(&format!(
        "Showing {} of {} transactions (Moonbase Alpha testnet)",
        transactions.len().min(MAX_ROWS),
        transactions.len()
    ));

    Ok(())
}
