use serde::{Deserialize, Serialize};
use std::fmt;

use super::AddressError;

/// Network an address is validated for.
///
/// Both networks currently share the same rules; EIP-1191 chain-salted
/// checksums are not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn is_testnet(&self) -> bool {
        matches!(self, Network::Testnet)
    }
}

impl From<bool> for Network {
    fn from(is_testnet: bool) -> Self {
        if is_testnet {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

/// Outcome of validating a textual address.
///
/// `message` is empty when the address is valid, otherwise it carries the
/// [`AddressError`] display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressValidation {
    pub is_valid: bool,
    pub message: String,
}

impl AddressValidation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(error: &AddressError) -> Self {
        Self {
            is_valid: false,
            message: error.to_string(),
        }
    }

    /// Converts back into the typed error. Unknown messages on an invalid
    /// outcome map to [`AddressError::InvalidFormat`].
    pub fn into_result(self) -> Result<(), AddressError> {
        if self.is_valid {
            return Ok(());
        }
        match self.message.as_str() {
            m if m == AddressError::InvalidChecksum.to_string() => {
                Err(AddressError::InvalidChecksum)
            }
            _ => Err(AddressError::InvalidFormat),
        }
    }
}

impl From<AddressError> for AddressValidation {
    fn from(error: AddressError) -> Self {
        Self::invalid(&error)
    }
}

impl From<AddressValidation> for (bool, String) {
    fn from(validation: AddressValidation) -> Self {
        (validation.is_valid, validation.message)
    }
}
