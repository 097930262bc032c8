//! Integration tests for the public address validation API.

mod address_validation;
