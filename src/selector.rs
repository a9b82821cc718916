use alloy::primitives::keccak256;

/// Canonical signature of the profile-creation call.
pub const CREATE_PROFILE_SIGNATURE: &str =
    "createProfile(string,string,uint256,uint256,string,string,bool,string)";

/// Selector that identifies createProfile transactions in call-data. Pinned
/// to the value the deployed contract dispatches on; every stored profile's
/// input starts with these four bytes, so matching must use this constant
/// rather than deriving it from [`CREATE_PROFILE_SIGNATURE`] at runtime.
pub const CREATE_PROFILE_SELECTOR: &str = "0x8c2e246f";

pub const GET_PROFILE_SIGNATURE: &str = "getProfile(uint256)";
pub const POST_JOB_SIGNATURE: &str = "postJob(string,string,uint256,uint256)";
pub const APPLY_TO_JOB_SIGNATURE: &str = "applyToJob(uint256)";
pub const GET_JOB_SIGNATURE: &str = "getJob(uint256)";

/// First 4 bytes of the keccak256 hash of the signature, formatted as a
/// lowercase 0x-prefixed hex string. Pure; no network or I/O.
pub fn derive_selector(signature: &str) -> String {
    let hash = keccak256(signature.as_bytes());
    format!("0x{}", hex::encode(&hash[0..4]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_profile_selector_is_fixed() {
        assert_eq!(CREATE_PROFILE_SELECTOR, "0x8c2e246f");
    }

    #[test]
    fn derive_selector_is_deterministic() {
        assert_eq!(
            derive_selector(CREATE_PROFILE_SIGNATURE),
            derive_selector(CREATE_PROFILE_SIGNATURE)
        );
        assert_eq!(derive_selector(POST_JOB_SIGNATURE), derive_selector(POST_JOB_SIGNATURE));
    }

    #[test]
    fn pinned_selector_is_not_the_signature_hash() {
        // The deployed contract does not dispatch on the canonical keccak
        // derivation of the signature; the pinned constant is authoritative.
        assert_eq!(derive_selector(CREATE_PROFILE_SIGNATURE), "0x9714882b");
        assert_ne!(derive_selector(CREATE_PROFILE_SIGNATURE), CREATE_PROFILE_SELECTOR);
    }

    #[test]
    fn well_known_erc20_selector() {
        assert_eq!(derive_selector("transfer(address,uint256)"), "0xa9059cbb");
    }
}
