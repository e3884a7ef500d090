//! Response Messages

use serde::{Deserialize, Serialize};

use crate::domain::{PageResponse, Zone};
use crate::error::ExemptionError;

/// Verdict for a transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxableResponse {
    pub taxable: bool,
}

/// A single zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneResponse {
    pub zone: Zone,
}

/// A page of zones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonesResponse {
    pub zones: Vec<Zone>,
    pub pagination: PageResponse,
}

/// A page of member addresses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressesResponse {
    pub addresses: Vec<String>,
    pub pagination: PageResponse,
}

/// Error response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub error_code: u32,
    /// Error message
    pub error_message: String,
}

impl From<&ExemptionError> for ErrorResponse {
    fn from(err: &ExemptionError) -> Self {
        Self {
            error_code: err.code(),
            error_message: err.to_string(),
        }
    }
}

/// Error codes for tax exemption operations
pub mod error_codes {
    /// No such zone in exemption list
    pub const ZONE_NOT_FOUND: u32 = 1;
    /// No such address in exemption list
    pub const ADDRESS_NOT_FOUND: u32 = 2;
    /// Genesis address group names an unlisted zone
    pub const ZONE_NOT_EXIST: u32 = 3;
    /// Genesis zone list and address groups differ in length
    pub const ZONE_LENGTH_INVALID: u32 = 4;
    pub const EMPTY_ZONE_NAME: u32 = 1801;
    pub const INVALID_ADDRESS: u32 = 1802;
    pub const INVALID_PAGINATION: u32 = 1803;
    pub const ALREADY_ASSOCIATED: u32 = 1804;
    pub const UNAUTHORIZED: u32 = 1805;
    pub const INVALID_CONFIG: u32 = 1806;
    /// Store or codec failure
    pub const INTERNAL: u32 = 1898;
    /// Exported state failed its own validation
    pub const STATE_CORRUPTED: u32 = 1899;
}
