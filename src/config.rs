use alloy::primitives::Address;
use anyhow::{Context, Result};
use std::{env, str::FromStr};

/// RugbyCV Kenya deployments on Moonbase Alpha (chain id 1287).
pub const DEFAULT_PROFILE_ADDRESS: &str = "0xc20582cc40d027678178F814A393D7a7Dbf41086";
pub const DEFAULT_JOB_BOARD_ADDRESS: &str = "0xD9e719E87f67bd75b24f0b35B6946e3ABA747B09";
pub const DEFAULT_EXPLORER_API_URL: &str = "https://api-moonbase.moonscan.io/api";
pub const DEFAULT_EXPLORER_BASE_URL: &str = "https://moonbase.moonscan.io";

/// Runtime configuration, loaded from the environment (.env supported) with
/// the testnet deployment as defaults.
pub struct Config {
    pub profile_address: Address,
    pub job_board_address: Address,
    pub explorer_api_url: String,
    pub explorer_api_key: String,
    pub explorer_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let profile_str =
            env::var("PROFILE_ADDRESS").unwrap_or_else(|_| DEFAULT_PROFILE_ADDRESS.to_string());
        let profile_address =
            Address::from_str(&profile_str).context("Invalid PROFILE_ADDRESS")?;

        let job_board_str =
            env::var("JOB_BOARD_ADDRESS").unwrap_or_else(|_| DEFAULT_JOB_BOARD_ADDRESS.to_string());
        let job_board_address =
            Address::from_str(&job_board_str).context("Invalid JOB_BOARD_ADDRESS")?;

        let explorer_api_url =
            env::var("EXPLORER_API_URL").unwrap_or_else(|_| DEFAULT_EXPLORER_API_URL.to_string());
        let explorer_api_key = env::var("EXPLORER_API_KEY").unwrap_or_else(|_| "abc".to_string());
        let explorer_base_url =
            env::var("EXPLORER_BASE_URL").unwrap_or_else(|_| DEFAULT_EXPLORER_BASE_URL.to_string());

        Ok(Self {
            profile_address,
            job_board_address,
            explorer_api_url,
            explorer_api_key,
            explorer_base_url,
        })
    }
}
