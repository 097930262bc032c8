//! # Services Module
//!
//! Address validation services.

mod address_validator;
pub use address_validator::*;
