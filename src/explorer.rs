use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;
use url::Url;

use crate::history::RawTransaction;

/// Etherscan-style envelope. `result` is an array of transactions on success
/// and an error string otherwise, so it stays untyped until inspected.
#[derive(Debug, Deserialize)]
struct TxListResponse {
    status: String,
    message: String,
    result: serde_json::Value,
}

/// Client for an Etherscan-compatible block-explorer API (Moonscan on
/// Moonbase Alpha by default). Performs one GET per call; retries,
/// pagination and rate limiting belong to the caller.
pub struct ExplorerClient {
    http: Client,
    api_url: Url,
    api_key: String,
}

impl ExplorerClient {
    pub fn new(api_url: &str, api_key: &str) -> Result<Self> {
        let api_url = Url::parse(api_url).context("Invalid explorer API URL")?;
        Ok(Self {
            http: Client::new(),
            api_url,
            api_key: api_key.to_string(),
        })
    }

    /// Fetches the wallet's transaction history, newest first. The selection
    /// policy in [`crate::history`] relies on this `sort=desc` ordering.
    pub async fn fetch_tx_history(&self, wallet: &str) -> Result<Vec<RawTransaction>> {
        let mut url = self.api_url.clone();
        url.query_pairs_mut()
            .append_pair("module", "account")
            .append_pair("action", "txlist")
            .append_pair("address", wallet)
            .append_pair("startblock", "0")
            .append_pair("endblock", "99999999")
            .append_pair("sort", "desc")
            .append_pair("apikey", &self.api_key);

        let response: TxListResponse = self
            .http
            .get(url)
            .send()
            .await
            .context("Explorer request failed")?
            .json()
            .await
            .context("Explorer returned invalid JSON")?;

        match response.result {
            serde_json::Value::Array(_) => {
                let txs: Vec<RawTransaction> = serde_json::from_value(response.result)
                    .context("Unexpected transaction shape in explorer response")?;
                if txs.is_empty() && response.status == "0" {
                    // Status 0 with an empty array is "No transactions
                    // found": a valid empty state, not an error.
                    info!(wallet, message = %response.message, "no transactions yet");
                } else {
                    info!(wallet, count = txs.len(), "fetched transaction history");
                }
                Ok(txs)
            }
            other => bail!("Explorer error: {} ({})", response.message, other),
        }
    }
}
