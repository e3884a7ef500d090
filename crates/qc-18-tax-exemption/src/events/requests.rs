//! Request Messages
//!
//! Mutating commands carry the signer in `authority`; queries carry none.

use serde::{Deserialize, Serialize};

use crate::domain::{validate_zone_name, PageRequest, Zone};
use crate::error::ExemptionError;

/// Create or overwrite a zone, optionally seeding its members.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddZoneRequest {
    pub authority: String,
    pub zone: String,
    pub outgoing: bool,
    pub incoming: bool,
    pub cross_zone: bool,
    /// Addresses to associate in the same commit.
    #[serde(default)]
    pub addresses: Vec<String>,
}

impl AddZoneRequest {
    pub fn validate_basic(&self) -> Result<(), ExemptionError> {
        validate_zone_name(&self.zone)
    }

    pub fn to_zone(&self) -> Zone {
        Zone {
            name: self.zone.clone(),
            outgoing: self.outgoing,
            incoming: self.incoming,
            cross_zone: self.cross_zone,
        }
    }
}

/// Update the flags of an existing zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyZoneRequest {
    pub authority: String,
    pub zone: String,
    pub outgoing: bool,
    pub incoming: bool,
    pub cross_zone: bool,
}

impl ModifyZoneRequest {
    pub fn validate_basic(&self) -> Result<(), ExemptionError> {
        validate_zone_name(&self.zone)
    }

    pub fn to_zone(&self) -> Zone {
        Zone {
            name: self.zone.clone(),
            outgoing: self.outgoing,
            incoming: self.incoming,
            cross_zone: self.cross_zone,
        }
    }
}

/// Remove a zone and its memberships.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveZoneRequest {
    pub authority: String,
    pub zone: String,
}

impl RemoveZoneRequest {
    pub fn validate_basic(&self) -> Result<(), ExemptionError> {
        validate_zone_name(&self.zone)
    }
}

/// Associate addresses with a zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAddressesRequest {
    pub authority: String,
    pub zone: String,
    pub addresses: Vec<String>,
}

impl AddAddressesRequest {
    pub fn validate_basic(&self) -> Result<(), ExemptionError> {
        validate_zone_name(&self.zone)
    }
}

/// Dissociate addresses from a zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveAddressesRequest {
    pub authority: String,
    pub zone: String,
    pub addresses: Vec<String>,
}

impl RemoveAddressesRequest {
    pub fn validate_basic(&self) -> Result<(), ExemptionError> {
        validate_zone_name(&self.zone)
    }
}

/// Does the levy apply to a transfer? Empty addresses mean "unspecified".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxableRequest {
    #[serde(default)]
    pub from_address: String,
    #[serde(default)]
    pub to_address: String,
}

/// Fetch one zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRequest {
    pub zone_name: String,
}

/// Page through zones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonesRequest {
    #[serde(default)]
    pub pagination: Option<PageRequest>,
}

/// Page through member addresses, optionally of one zone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressesRequest {
    #[serde(default)]
    pub zone_name: String,
    #[serde(default)]
    pub pagination: Option<PageRequest>,
}
