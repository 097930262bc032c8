//! Validation and EIP-55 checksum encoding of Ethereum account addresses.
//!
//! ```
//! use eth_address_validator::{to_checksum_address, validate_address};
//!
//! let checksummed = to_checksum_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
//! assert_eq!(checksummed, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
//!
//! let validation = validate_address(&checksummed, false);
//! assert!(validation.is_valid);
//! ```

pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

pub use models::{AddressError, AddressValidation, Network};
pub use services::{
    is_checksum_valid, to_checksum_address, validate_address, AddressValidatorTrait,
    EthereumAddressValidator,
};
