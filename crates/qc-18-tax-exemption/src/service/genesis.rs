//! Genesis import and export.

use std::collections::BTreeMap;

use shared_types::AccountAddress;
use tracing::{error, info, warn};

use super::paginator::NamespaceIter;
use super::{decode_zone_name, TaxExemptionService};
use crate::domain::{keys, AddressGroup, GenesisState, Zone};
use crate::error::ExemptionError;
use crate::ports::outbound::{KeyValueStore, ScanDirection};

impl<S: KeyValueStore> TaxExemptionService<S> {
    /// Load a snapshot: every zone first, then every membership.
    ///
    /// The caller validates beforehand; the first failing write aborts the import.
    pub fn import_genesis(&mut self, genesis: &GenesisState) -> Result<(), ExemptionError> {
        for zone in &genesis.zone_list {
            self.add_zone(zone.clone())?;
        }
        for group in &genesis.address_groups {
            self.add_addresses(&group.zone_name, &group.addresses)?;
        }

        info!(
            zones = genesis.zone_list.len(),
            addresses = genesis.address_count(),
            "[qc-18] Genesis imported"
        );
        Ok(())
    }

    /// Snapshot the full state in store key order.
    ///
    /// Every zone gets a group, possibly empty. A snapshot that fails its own
    /// validation means the store is corrupted and yields
    /// [`ExemptionError::StateCorrupted`].
    pub fn export_genesis(&self) -> Result<GenesisState, ExemptionError> {
        let batch_size = self.config.scan_batch_size;

        let mut zone_list = Vec::new();
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entry in NamespaceIter::new(
            &self.store,
            keys::ZONE_PREFIX,
            None,
            ScanDirection::Forward,
            batch_size,
        ) {
            let (_, value) = entry?;
            let zone: Zone = bincode::deserialize(&value)?;
            groups.insert(zone.name.clone(), Vec::new());
            zone_list.push(zone);
        }

        for entry in NamespaceIter::new(
            &self.store,
            keys::MEMBERSHIP_PREFIX,
            None,
            ScanDirection::Forward,
            batch_size,
        ) {
            let (key, value) = entry?;
            let address = AccountAddress::from_slice(&key)
                .map_err(|e| ExemptionError::StateCorrupted(e.to_string()))?;
            let zone_name = decode_zone_name(value)?;

            match groups.get_mut(&zone_name) {
                Some(members) => members.push(address.to_string()),
                None => warn!(
                    address = %address,
                    zone = %zone_name,
                    "[qc-18] Skipping membership of a missing zone"
                ),
            }
        }

        let genesis = GenesisState {
            zone_list,
            address_groups: groups
                .into_iter()
                .map(|(zone_name, addresses)| AddressGroup {
                    zone_name,
                    addresses,
                })
                .collect(),
        };

        if let Err(e) = genesis.validate() {
            error!(error = %e, "[qc-18] Exported genesis failed validation");
            return Err(ExemptionError::StateCorrupted(e.to_string()));
        }

        info!(
            zones = genesis.zone_list.len(),
            addresses = genesis.address_count(),
            "[qc-18] Genesis exported"
        );
        Ok(genesis)
    }
}
