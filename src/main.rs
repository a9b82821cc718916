use anyhow::{Context, Result};
use chrono::Local;
use dotenv::dotenv;
use std::env;
use tracing_subscriber::EnvFilter;

use rugbycv_engine::config::Config;
use rugbycv_engine::explorer::ExplorerClient;
use rugbycv_engine::history::{resolve_profile, ProfileStatus, ProfileView};

// Helper function for timestamped logging
fn log(msg: &str) {
    println!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), msg);
}

fn print_profile(view: &ProfileView, wallet: &str, explorer_base_url: &str) {
    let record = &view.record;
    println!();
    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║                 🏉 RUGBYCV ON-CHAIN PROFILE 🏉                 ║");
    println!("╚════════════════════════════════════════════════════════════════╝");
    println!();
    println!("  Name:         {}", record.name);
    println!("  Position:     {}", record.position);
    println!("  Height:       {} cm", record.height);
    println!("  Weight:       {} kg", record.weight);
    println!("  Second job:   {}", record.second_job);
    println!("  Injury:       {}", record.injury_status);
    println!(
        "  Transfer:     {}",
        if record.available_for_transfer {
            "✓ available"
        } else {
            "✗ not available"
        }
    );
    println!("  Video:        {}", record.video_hash);
    println!();
    println!("  ─── Blockchain verified ───");
    println!("  Wallet:       {}", wallet);
    println!(
        "  Transaction:  {}/tx/{}",
        explorer_base_url, view.transaction_hash
    );
    if let Some(created_at) = view.created_at {
        println!("  Created:      {}", created_at.format("%Y-%m-%d"));
    }
    println!("  Block:        {}", view.block_number);
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    log("🏉 RugbyCV Profile Lookup");

    let config = Config::from_env()?;
    let wallet = env::args()
        .nth(1)
        .or_else(|| env::var("WALLET_ADDRESS").ok())
        .context("Pass a wallet address as the first argument or set WALLET_ADDRESS")?;

    log(&format!(
        "⚙️  Contract: {} | Explorer: {}",
        config.profile_address, config.explorer_api_url
    ));
    log(&format!("👤 Wallet: {}", wallet));

    let explorer = ExplorerClient::new(&config.explorer_api_url, &config.explorer_api_key)?;
    let transactions = explorer.fetch_tx_history(&wallet).await?;
    log(&format!(
        "📜 {} transactions in history",
        transactions.len()
    ));

    match resolve_profile(&transactions, &config.profile_address) {
        ProfileStatus::NotFound => {
            log("⚠️  No profile found for this wallet yet. Create one to get started!");
        }
        ProfileStatus::Unreadable {
            transaction_hash,
            error,
        } => {
            log(&format!("❌ Profile exists but is unreadable: {}", error));
            log(&format!(
                "   Tx: {}/tx/{}",
                config.explorer_base_url, transaction_hash
            ));
        }
        ProfileStatus::Found(view) => {
            print_profile(&view, &wallet, &config.explorer_base_url);
            log("✅ Profile loaded from chain");
        }
    }

    Ok(())
}
