//! Ethereum address validation service.
//!
//! [`EthereumAddressValidator`] is stateless, so the module-level
//! [`validate_address`] and [`to_checksum_address`] functions are the usual
//! entry points. The trait exists for callers that want to inject a
//! validator.

use log::{debug, trace};

use crate::{
    constants::ADDRESS_PREFIX,
    models::{AddressError, AddressValidation, Network},
    utils::{address_body, apply_checksum, is_uniform_case, is_valid_non_checksum_address},
};

pub trait AddressValidatorTrait: Send + Sync {
    /// Validates the shape of `address` and, for mixed-case input, its checksum.
    fn validate_address(&self, address: &str, network: Network) -> AddressValidation;

    /// Converts a well-formed address to its checksummed form.
    fn to_checksum_address(&self, address: &str) -> Result<String, AddressError>;
}

/// Validator for EIP-55 checksummed Ethereum addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EthereumAddressValidator;

impl EthereumAddressValidator {
    pub fn new() -> Self {
        Self
    }
}

impl AddressValidatorTrait for EthereumAddressValidator {
    fn validate_address(&self, address: &str, network: Network) -> AddressValidation {
        // Network does not change the rules.
        trace!("validating address for {}", network);

        if !is_valid_non_checksum_address(address) {
            debug!("address rejected: {}", AddressError::InvalidFormat);
            return AddressError::InvalidFormat.into();
        }

        if is_uniform_case(address_body(address)) {
            return AddressValidation::valid();
        }

        match self.to_checksum_address(address) {
            Ok(checksummed) if checksummed == address => AddressValidation::valid(),
            Ok(checksummed) => {
                debug!(
                    "address rejected: {} (expected {})",
                    AddressError::InvalidChecksum,
                    checksummed
                );
                AddressError::InvalidChecksum.into()
            }
            Err(e) => {
                debug!("checksum conversion failed: {}", e);
                AddressError::InvalidChecksum.into()
            }
        }
    }

    fn to_checksum_address(&self, address: &str) -> Result<String, AddressError> {
        if !is_valid_non_checksum_address(address) {
            return Err(AddressError::InvalidFormat);
        }

        let lower_body = address_body(address).to_ascii_lowercase();
        Ok(format!("{}{}", ADDRESS_PREFIX, apply_checksum(&lower_body)))
    }
}

/// Validates `address`. `is_testnet` is accepted for API parity and does not
/// alter the result.
pub fn validate_address(address: &str, is_testnet: bool) -> AddressValidation {
    EthereumAddressValidator.validate_address(address, Network::from(is_testnet))
}

pub fn to_checksum_address(address: &str) -> Result<String, AddressError> {
    EthereumAddressValidator.to_checksum_address(address)
}

/// Shorthand for `validate_address(address, false).is_valid`.
pub fn is_checksum_valid(address: &str) -> bool {
    validate_address(address, false).is_valid
}
