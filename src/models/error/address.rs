use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressError {
    /// Input is not `0x` followed by exactly 40 hex characters.
    #[error("Invalid format")]
    InvalidFormat,

    /// Mixed-case address whose case pattern does not match the derived checksum.
    #[error("Invalid checksum")]
    InvalidChecksum,
}
