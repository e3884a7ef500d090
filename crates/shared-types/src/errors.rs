//! # Error Types
//!
//! Identity-format errors returned when an account address fails validation.

use thiserror::Error;

/// Errors produced by [`crate::AccountAddress::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Address is empty.
    #[error("empty address string is not allowed")]
    Empty,

    /// Address does not start with `0x`.
    #[error("address {0:?} is missing the 0x prefix")]
    MissingPrefix(String),

    /// Address body is not valid hexadecimal.
    #[error("address {address:?} is not valid hex: {reason}")]
    InvalidHex { address: String, reason: String },

    /// Address decodes to the wrong number of bytes.
    #[error("address has invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
