use alloy::primitives::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decoder::{decode_profile_input, ProfileRecord};
use crate::error::DecodeError;
use crate::selector::CREATE_PROFILE_SELECTOR;

/// One entry of an Etherscan-compatible `txlist` response. The explorer sends
/// numerics as decimal strings; records are read-only once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTransaction {
    pub hash: String,
    pub from: String,
    /// Empty or absent for contract-creation transactions.
    #[serde(default)]
    pub to: Option<String>,
    /// "0" marks successful on-chain execution.
    #[serde(rename = "isError", default)]
    pub is_error: String,
    pub input: String,
    #[serde(rename = "timeStamp", default)]
    pub time_stamp: String,
    #[serde(rename = "blockNumber", default)]
    pub block_number: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "gasPrice", default)]
    pub gas_price: String,
}

impl RawTransaction {
    pub fn failed(&self) -> bool {
        self.is_error != "0"
    }

    /// 0x-prefixed 4-byte selector prefix of the input, or the whole input
    /// when it is shorter (plain value transfers carry just "0x").
    pub fn method_id(&self) -> &str {
        self.input.get(..10).unwrap_or(&self.input)
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let secs: i64 = self.time_stamp.parse().ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}

/// Decoded profile plus the provenance of the transaction that carried it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub record: ProfileRecord,
    pub transaction_hash: String,
    pub block_number: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Outcome of a profile lookup. The three arms are distinct user-visible
/// states: "create a profile", "profile exists but is unreadable", and the
/// profile itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileStatus {
    NotFound,
    Unreadable {
        transaction_hash: String,
        error: DecodeError,
    },
    Found(ProfileView),
}

/// Picks the current createProfile transaction out of a wallet's history.
///
/// A transaction matches when its recipient is the profile contract
/// (case-insensitive), it executed successfully, and its input starts with
/// the createProfile selector. The history is expected newest-first (the
/// explorer fetch uses `sort=desc`), so the first match is the current
/// profile; the policy trusts that ordering and never re-sorts by block
/// number. `None` is the legitimate "no profile yet" state.
pub fn select_latest_profile_tx<'a>(
    transactions: &'a [RawTransaction],
    profile_address: &Address,
) -> Option<&'a RawTransaction> {
    let target = profile_address.to_string().to_lowercase();

    transactions.iter().find(|tx| {
        tx.to
            .as_deref()
            .is_some_and(|to| to.to_lowercase() == target)
            && !tx.failed()
            && tx.input.to_lowercase().starts_with(CREATE_PROFILE_SELECTOR)
    })
}

/// Selection and decoding in one step, with provenance attached.
pub fn resolve_profile(
    transactions: &[RawTransaction],
    profile_address: &Address,
) -> ProfileStatus {
    let Some(tx) = select_latest_profile_tx(transactions, profile_address) else {
        return ProfileStatus::NotFound;
    };

    match decode_profile_input(&tx.input) {
        Ok(record) => ProfileStatus::Found(ProfileView {
            record,
            transaction_hash: tx.hash.clone(),
            block_number: tx.block_number.clone(),
            created_at: tx.timestamp(),
        }),
        Err(error) => {
            debug!(tx = %tx.hash, %error, "createProfile call-data failed to decode");
            ProfileStatus::Unreadable {
                transaction_hash: tx.hash.clone(),
                error,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const PROFILE_ADDR: &str = "0xc20582cc40d027678178F814A393D7a7Dbf41086";

    fn profile_address() -> Address {
        Address::from_str(PROFILE_ADDR).unwrap()
    }

    fn tx(hash: &str, to: &str, is_error: &str, input: &str, block: &str) -> RawTransaction {
        RawTransaction {
            hash: hash.to_string(),
            from: "0x1111111111111111111111111111111111111111".to_string(),
            to: Some(to.to_string()),
            is_error: is_error.to_string(),
            input: input.to_string(),
            time_stamp: "1700000000".to_string(),
            block_number: block.to_string(),
            value: "0".to_string(),
            gas_price: "1000000000".to_string(),
        }
    }

    #[test]
    fn empty_history_selects_nothing() {
        assert!(select_latest_profile_tx(&[], &profile_address()).is_none());
        assert_eq!(resolve_profile(&[], &profile_address()), ProfileStatus::NotFound);
    }

    #[test]
    fn other_recipients_do_not_match() {
        let txs = vec![tx(
            "0xaaa",
            "0xD9e719E87f67bd75b24f0b35B6946e3ABA747B09",
            "0",
            "0x8c2e246f",
            "100",
        )];
        assert!(select_latest_profile_tx(&txs, &profile_address()).is_none());
    }

    #[test]
    fn failed_transactions_are_ignored() {
        let txs = vec![
            tx("0xgood", PROFILE_ADDR, "0", "0x8c2e246f", "100"),
            tx("0xbad", PROFILE_ADDR, "1", "0x8c2e246f", "200"),
        ];
        let selected = select_latest_profile_tx(&txs, &profile_address()).unwrap();
        assert_eq!(selected.hash, "0xgood");
    }

    #[test]
    fn failed_transaction_listed_first_is_skipped() {
        let txs = vec![
            tx("0xbad", PROFILE_ADDR, "1", "0x8c2e246f", "200"),
            tx("0xgood", PROFILE_ADDR, "0", "0x8c2e246f", "100"),
        ];
        let selected = select_latest_profile_tx(&txs, &profile_address()).unwrap();
        assert_eq!(selected.hash, "0xgood");
    }

    #[test]
    fn ordering_is_trusted_not_resorted() {
        // First match wins even though its block number is lower.
        let txs = vec![
            tx("0xfirst", PROFILE_ADDR, "0", "0x8c2e246f", "100"),
            tx("0xsecond", PROFILE_ADDR, "0", "0x8c2e246f", "900"),
        ];
        let selected = select_latest_profile_tx(&txs, &profile_address()).unwrap();
        assert_eq!(selected.hash, "0xfirst");
    }

    #[test]
    fn address_and_selector_match_case_insensitively() {
        let txs = vec![tx(
            "0xaaa",
            &PROFILE_ADDR.to_uppercase().replace("0X", "0x"),
            "0",
            "0x8C2E246F",
            "100",
        )];
        assert!(select_latest_profile_tx(&txs, &profile_address()).is_some());
    }

    #[test]
    fn matching_but_undecodable_input_is_unreadable() {
        let txs = vec![tx("0xaaa", PROFILE_ADDR, "0", "0x8c2e246f0000", "100")];
        match resolve_profile(&txs, &profile_address()) {
            ProfileStatus::Unreadable { transaction_hash, error } => {
                assert_eq!(transaction_hash, "0xaaa");
                assert!(matches!(error, DecodeError::SchemaMismatch(_)));
            }
            other => panic!("expected Unreadable, got {other:?}"),
        }
    }
}
