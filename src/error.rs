use thiserror::Error;

/// Failure modes of call-data decoding. "No matching transaction" is not an
/// error and lives in [`crate::history::ProfileStatus::NotFound`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input too short, not 0x-prefixed, or not valid hex. ABI decoding was
    /// never attempted.
    #[error("malformed call-data: {0}")]
    Malformed(String),

    /// Valid bytes that do not fit the eight-parameter createProfile schema,
    /// so the caller can tell garbage bytes apart from wrongly shaped ones.
    #[error("call-data does not match the createProfile schema: {0}")]
    SchemaMismatch(String),

    /// A uint256 field exceeds u64 during narrowing. Rejected rather than
    /// silently truncated.
    #[error("uint256 field `{field}` does not fit in u64")]
    OverflowOnNarrow { field: &'static str },
}
