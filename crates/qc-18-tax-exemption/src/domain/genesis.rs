//! Genesis snapshot: the whole registry and membership index as one document.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared_types::validate_address;

use crate::domain::zone::Zone;
use crate::error::ExemptionError;

/// Addresses belonging to one zone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressGroup {
    pub zone_name: String,
    pub addresses: Vec<String>,
}

/// Exportable/importable state of the subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenesisState {
    pub zone_list: Vec<Zone>,
    pub address_groups: Vec<AddressGroup>,
}

impl GenesisState {
    pub fn new(zone_list: Vec<Zone>, address_groups: Vec<AddressGroup>) -> Self {
        Self {
            zone_list,
            address_groups,
        }
    }

    /// Structural checks, in order: list lengths, then per group the zone
    /// reference followed by each address.
    pub fn validate(&self) -> Result<(), ExemptionError> {
        if self.zone_list.len() != self.address_groups.len() {
            return Err(ExemptionError::ZoneLengthInvalid {
                zones: self.zone_list.len(),
                groups: self.address_groups.len(),
            });
        }

        let names: HashSet<&str> = self.zone_list.iter().map(|z| z.name.as_str()).collect();

        for group in &self.address_groups {
            if !names.contains(group.zone_name.as_str()) {
                return Err(ExemptionError::ZoneNotExist(group.zone_name.clone()));
            }
            for address in &group.addresses {
                validate_address(address)?;
            }
        }

        Ok(())
    }

    /// Number of addresses across all groups.
    pub fn address_count(&self) -> usize {
        self.address_groups.iter().map(|g| g.addresses.len()).sum()
    }
}
