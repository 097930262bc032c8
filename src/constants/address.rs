//! Constants describing the textual shape of an Ethereum account address.

/// Literal prefix every address must start with. Case-sensitive: `0X` is rejected.
pub const ADDRESS_PREFIX: &str = "0x";

/// Number of hex characters after the prefix (20 bytes).
pub const ADDRESS_BODY_LENGTH: usize = 40;

/// Total length of a prefixed address.
pub const ADDRESS_LENGTH: usize = ADDRESS_PREFIX.len() + ADDRESS_BODY_LENGTH;

/// Length of the hex-encoded Keccak-256 digest used for the checksum.
pub const CHECKSUM_HASH_LENGTH: usize = 64;

/// Digest characters at or above this one uppercase the matching body character.
pub const CHECKSUM_UPPERCASE_THRESHOLD: u8 = b'8';
