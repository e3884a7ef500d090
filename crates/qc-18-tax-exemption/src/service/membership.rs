//! Membership index operations.

use std::collections::HashSet;

use shared_types::AccountAddress;
use tracing::{debug, info, warn};

use super::TaxExemptionService;
use crate::domain::{keys, Zone, ZoneCache, ZoneMembership};
use crate::error::ExemptionError;
use crate::ports::outbound::{BatchOperation, KeyValueStore};

impl<S: KeyValueStore> TaxExemptionService<S> {
    /// Associate one address with an existing zone.
    ///
    /// Re-adding an address to its current zone succeeds without writing.
    pub fn add_address(&mut self, zone_name: &str, address: &str) -> Result<(), ExemptionError> {
        self.add_addresses(zone_name, &[address])
    }

    /// Associate many addresses with an existing zone in one commit.
    pub fn add_addresses<A: AsRef<str>>(
        &mut self,
        zone_name: &str,
        addresses: &[A],
    ) -> Result<(), ExemptionError> {
        self.require_zone(zone_name)?;
        let operations = self.stage_additions(zone_name, addresses)?;
        self.commit_memberships(zone_name, operations, "added")
    }

    /// Create or overwrite a zone and associate addresses with it in one commit.
    pub fn add_zone_with_addresses<A: AsRef<str>>(
        &mut self,
        zone: Zone,
        addresses: &[A],
    ) -> Result<(), ExemptionError> {
        zone.validate()?;
        let mut operations = vec![BatchOperation::put(
            keys::zone_key(&zone.name),
            bincode::serialize(&zone)?,
        )];
        operations.extend(self.stage_additions(&zone.name, addresses)?);

        let staged = operations.len() - 1;
        self.store.atomic_batch_write(operations)?;
        info!(
            zone = %zone.name,
            addresses = staged,
            "[qc-18] Zone stored with members"
        );
        Ok(())
    }

    /// Dissociate one address from the zone it belongs to.
    pub fn remove_address(&mut self, zone_name: &str, address: &str) -> Result<(), ExemptionError> {
        self.remove_addresses(zone_name, &[address])
    }

    /// Dissociate many addresses from one zone in one commit.
    ///
    /// Every address must currently belong to `zone_name`.
    pub fn remove_addresses<A: AsRef<str>>(
        &mut self,
        zone_name: &str,
        addresses: &[A],
    ) -> Result<(), ExemptionError> {
        self.require_zone(zone_name)?;

        let mut seen = HashSet::new();
        let mut operations = Vec::with_capacity(addresses.len());
        for raw in addresses {
            let raw = raw.as_ref();
            let not_found = || ExemptionError::AddressNotFound {
                address: raw.to_string(),
                zone: zone_name.to_string(),
            };

            let address = AccountAddress::parse(raw).map_err(|_| not_found())?;
            if !seen.insert(address) {
                continue;
            }
            match self.membership_of(&address)? {
                Some(current) if current == zone_name => {
                    operations.push(BatchOperation::delete(keys::membership_key(&address)));
                }
                _ => return Err(not_found()),
            }
        }

        self.commit_memberships(zone_name, operations, "removed")
    }

    /// Resolve an address to its zone, memoizing zone records in `cache`.
    ///
    /// Malformed or unassigned addresses resolve to `Absent`. Store failures
    /// are returned.
    pub fn check_and_cache_zone(
        &self,
        address: &str,
        cache: &mut ZoneCache,
    ) -> Result<ZoneMembership, ExemptionError> {
        let Ok(address) = AccountAddress::parse(address) else {
            return Ok(ZoneMembership::Absent);
        };
        let Some(zone_name) = self.membership_of(&address)? else {
            return Ok(ZoneMembership::Absent);
        };

        if let Some(zone) = cache.get(&zone_name) {
            return Ok(ZoneMembership::Present(zone.clone()));
        }

        match self.load_zone(&zone_name)? {
            Some(zone) => {
                cache.insert(zone_name, zone.clone());
                Ok(ZoneMembership::Present(zone))
            }
            None => {
                warn!(
                    address = %address,
                    zone = %zone_name,
                    "[qc-18] Membership references a missing zone"
                );
                Ok(ZoneMembership::Absent)
            }
        }
    }

    /// Validate additions and build their writes without touching the store.
    fn stage_additions<A: AsRef<str>>(
        &self,
        zone_name: &str,
        addresses: &[A],
    ) -> Result<Vec<BatchOperation>, ExemptionError> {
        let mut seen = HashSet::new();
        let mut operations = Vec::with_capacity(addresses.len());

        for raw in addresses {
            let address = AccountAddress::parse(raw.as_ref())?;
            if !seen.insert(address) {
                continue;
            }
            match self.membership_of(&address)? {
                Some(current) if current == zone_name => {
                    debug!(address = %address, zone = %zone_name, "[qc-18] Already a member");
                }
                Some(current) => {
                    return Err(ExemptionError::AlreadyAssociated {
                        address: address.to_string(),
                        zone: current,
                    });
                }
                None => operations.push(BatchOperation::put(
                    keys::membership_key(&address),
                    zone_name.as_bytes(),
                )),
            }
        }

        Ok(operations)
    }

    fn commit_memberships(
        &mut self,
        zone_name: &str,
        operations: Vec<BatchOperation>,
        action: &str,
    ) -> Result<(), ExemptionError> {
        if operations.is_empty() {
            return Ok(());
        }
        let count = operations.len();
        self.store.atomic_batch_write(operations)?;
        info!(zone = %zone_name, count, action, "[qc-18] Memberships updated");
        Ok(())
    }
}
