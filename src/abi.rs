use alloy::sol;

// RugbyCVProfile contract surface used by the decoder. The parameter order
// here is the bit-exact on-chain contract; reordering it changes the selector
// and orphans all stored history.
sol! {
    function createProfile(
        string name,
        string position,
        uint256 height,
        uint256 weight,
        string secondJob,
        string injuryStatus,
        bool availableForTransfer,
        string videoHash
    );
}
