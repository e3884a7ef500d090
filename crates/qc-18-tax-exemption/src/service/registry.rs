//! Zone registry operations.

use tracing::{debug, info};

use super::paginator::NamespaceIter;
use super::TaxExemptionService;
use crate::domain::{keys, validate_zone_name, Zone};
use crate::error::ExemptionError;
use crate::ports::outbound::{BatchOperation, KeyValueStore, ScanDirection};

impl<S: KeyValueStore> TaxExemptionService<S> {
    /// Create or overwrite a zone (upsert).
    pub fn add_zone(&mut self, zone: Zone) -> Result<(), ExemptionError> {
        zone.validate()?;
        self.store
            .put(&keys::zone_key(&zone.name), &bincode::serialize(&zone)?)?;

        info!(
            zone = %zone.name,
            outgoing = zone.outgoing,
            incoming = zone.incoming,
            cross_zone = zone.cross_zone,
            "[qc-18] Zone stored"
        );
        Ok(())
    }

    /// Update an existing zone. Never creates.
    pub fn modify_zone(&mut self, zone: Zone) -> Result<(), ExemptionError> {
        zone.validate()?;
        self.require_zone(&zone.name)?;
        self.store
            .put(&keys::zone_key(&zone.name), &bincode::serialize(&zone)?)?;

        info!(
            zone = %zone.name,
            outgoing = zone.outgoing,
            incoming = zone.incoming,
            cross_zone = zone.cross_zone,
            "[qc-18] Zone modified"
        );
        Ok(())
    }

    /// Delete a zone together with all of its memberships in one batch.
    pub fn remove_zone(&mut self, name: &str) -> Result<(), ExemptionError> {
        validate_zone_name(name)?;
        self.require_zone(name)?;

        let mut operations = vec![BatchOperation::delete(keys::zone_key(name))];
        let members = NamespaceIter::new(
            &self.store,
            keys::MEMBERSHIP_PREFIX,
            None,
            ScanDirection::Forward,
            self.config.scan_batch_size,
        );
        for entry in members {
            let (address, zone_name) = entry?;
            if zone_name == name.as_bytes() {
                operations.push(BatchOperation::delete(keys::prefixed(
                    keys::MEMBERSHIP_PREFIX,
                    &address,
                )));
            }
        }

        let removed = operations.len() - 1;
        self.store.atomic_batch_write(operations)?;

        info!(zone = %name, memberships = removed, "[qc-18] Zone removed");
        Ok(())
    }

    /// Look up a zone by name.
    pub fn get_zone(&self, name: &str) -> Result<Zone, ExemptionError> {
        let zone = self
            .load_zone(name)?
            .ok_or_else(|| ExemptionError::ZoneNotFound(name.to_string()))?;
        debug!(zone = %name, "[qc-18] Zone loaded");
        Ok(zone)
    }
}
