use alloy::primitives::U256;
use alloy::sol_types::SolCall;
use serde::{Deserialize, Serialize};

use crate::abi::createProfileCall;
use crate::error::DecodeError;

/// Player profile reconstructed from a createProfile transaction's call-data.
/// Either fully populated or not produced at all; the decoder never fills
/// fields with placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub position: String,
    /// Height in centimeters.
    pub height: u64,
    /// Weight in kilograms.
    pub weight: u64,
    pub second_job: String,
    pub injury_status: String,
    pub available_for_transfer: bool,
    /// Content-address reference to externally stored media; opaque here.
    pub video_hash: String,
}

/// Decodes the argument payload of a createProfile transaction input.
///
/// `input` is the full 0x-prefixed call-data: 4-byte selector followed by the
/// ABI-encoded arguments. The selector is stripped, not re-checked; matching
/// it is the selection policy's job (see [`crate::history`]).
///
/// Numeric narrowing: height and weight are uint256 on the wire but carried
/// as u64 here. Values over u64::MAX are rejected with
/// [`DecodeError::OverflowOnNarrow`] instead of being truncated.
pub fn decode_profile_input(input: &str) -> Result<ProfileRecord, DecodeError> {
    if !input.starts_with("0x") || input.len() < 10 {
        return Err(DecodeError::Malformed(format!(
            "expected 0x-prefixed call-data of at least 10 chars, got {}",
            input.len()
        )));
    }

    // Skip "0x" plus the 8 selector chars; the rest is the argument payload.
    let payload_hex = input
        .get(10..)
        .ok_or_else(|| DecodeError::Malformed("call-data is not ASCII hex".to_string()))?;
    let payload =
        hex::decode(payload_hex).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    let call = createProfileCall::abi_decode_raw(&payload, true)
        .map_err(|e| DecodeError::SchemaMismatch(e.to_string()))?;

    Ok(ProfileRecord {
        name: call.name,
        position: call.position,
        height: narrow(call.height, "height")?,
        weight: narrow(call.weight, "weight")?,
        second_job: call.secondJob,
        injury_status: call.injuryStatus,
        available_for_transfer: call.availableForTransfer,
        video_hash: call.videoHash,
    })
}

fn narrow(value: U256, field: &'static str) -> Result<u64, DecodeError> {
    u64::try_from(value).map_err(|_| DecodeError::OverflowOnNarrow { field })
}
