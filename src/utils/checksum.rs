//! EIP-55 mixed-case checksum primitives for Ethereum addresses.
//!
//! The checksum is derived from the Keccak-256 digest (the pre-standard
//! variant, not SHA3-256) of the lowercase 40-character address body. A body
//! character is uppercased when the digest character at the same index is
//! `'8'` or above.

use sha3::{Digest, Keccak256};

use crate::constants::{
    ADDRESS_BODY_LENGTH, ADDRESS_LENGTH, ADDRESS_PREFIX, CHECKSUM_UPPERCASE_THRESHOLD,
};

/// Returns the lowercase hex encoding of the Keccak-256 digest of `lower_body`.
pub fn checksum_hash(lower_body: &str) -> String {
    let mut hasher = Keccak256::new();
    hasher.update(lower_body.as_bytes());
    hex::encode(hasher.finalize())
}

/// Checks the `0x` + 40 hex character shape, ignoring letter case.
pub fn is_valid_non_checksum_address(address: &str) -> bool {
    if !address.starts_with(ADDRESS_PREFIX) || address.len() != ADDRESS_LENGTH {
        return false;
    }
    hex::decode(&address[ADDRESS_PREFIX.len()..]).is_ok()
}

/// Applies the checksum case pattern to an already lowercased address body.
///
/// The digest is compared character-wise against `'8'`, which matches the
/// nibble value comparison only because `'0'..='9'` sort below `'a'..='f'`.
pub fn apply_checksum(lower_body: &str) -> String {
    let hash = checksum_hash(lower_body);
    lower_body
        .chars()
        .zip(hash.bytes())
        .map(|(c, h)| {
            if h >= CHECKSUM_UPPERCASE_THRESHOLD {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

/// True when `body` carries no checksum information (all upper or all lower case).
pub fn is_uniform_case(body: &str) -> bool {
    body.to_ascii_uppercase() == body || body.to_ascii_lowercase() == body
}

/// Strips the `0x` prefix from a shape-checked address.
pub(crate) fn address_body(address: &str) -> &str {
    &address[ADDRESS_PREFIX.len()..ADDRESS_PREFIX.len() + ADDRESS_BODY_LENGTH]
}
