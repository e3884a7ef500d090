//! Zone entity.

use serde::{Deserialize, Serialize};

use crate::error::ExemptionError;

/// A named group of addresses sharing levy-exemption permissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Zone {
    /// Unique, non-empty zone name.
    pub name: String,
    /// Members may send to addresses outside the zone without the levy.
    pub outgoing: bool,
    /// Members may receive from addresses outside the zone without the levy.
    pub incoming: bool,
    /// Directional flags also apply when the counterparty sits in a different zone.
    pub cross_zone: bool,
}

impl Zone {
    /// Create a zone with all flags cleared.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the outgoing flag.
    pub fn with_outgoing(mut self, outgoing: bool) -> Self {
        self.outgoing = outgoing;
        self
    }

    /// Set the incoming flag.
    pub fn with_incoming(mut self, incoming: bool) -> Self {
        self.incoming = incoming;
        self
    }

    /// Set the cross-zone flag.
    pub fn with_cross_zone(mut self, cross_zone: bool) -> Self {
        self.cross_zone = cross_zone;
        self
    }

    /// Check the name invariant.
    pub fn validate(&self) -> Result<(), ExemptionError> {
        validate_zone_name(&self.name)
    }
}

/// Zone names must be non-empty.
pub fn validate_zone_name(name: &str) -> Result<(), ExemptionError> {
    if name.is_empty() {
        return Err(ExemptionError::EmptyZoneName);
    }
    Ok(())
}
