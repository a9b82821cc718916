//! Core of the RugbyCV Kenya profile product: reconstructing a player's
//! on-chain profile from raw transaction history.
//!
//! The pipeline is fetch → select → decode: [`explorer`] pulls a wallet's
//! transaction list (newest first) from a Moonscan-style API, [`history`]
//! picks the current successful createProfile call by selector match, and
//! [`decoder`] turns its call-data back into a [`decoder::ProfileRecord`].
//! Selector derivation and decoding are pure and synchronous; the network
//! fetch is the only async boundary.

pub mod abi;
pub mod config;
pub mod decoder;
pub mod error;
pub mod explorer;
pub mod history;
pub mod selector;

pub use decoder::{decode_profile_input, ProfileRecord};
pub use error::DecodeError;
pub use history::{
    resolve_profile, select_latest_profile_tx, ProfileStatus, ProfileView, RawTransaction,
};
pub use selector::{derive_selector, CREATE_PROFILE_SELECTOR, CREATE_PROFILE_SIGNATURE};
