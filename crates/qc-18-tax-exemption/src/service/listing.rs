//! Paged listings of zones and member addresses.

use shared_types::AccountAddress;

use super::paginator::paginate;
use super::TaxExemptionService;
use crate::domain::{keys, Page, PageRequest, Zone};
use crate::error::ExemptionError;
use crate::ports::outbound::KeyValueStore;

impl<S: KeyValueStore> TaxExemptionService<S> {
    /// Zones in name order.
    pub fn list_zones(&self, request: &PageRequest) -> Result<Page<Zone>, ExemptionError> {
        paginate(
            &self.store,
            keys::ZONE_PREFIX,
            request,
            &self.config,
            |_, value| Ok(Some(bincode::deserialize(value)?)),
        )
    }

    /// Member addresses in address order, restricted to `zone_filter` when
    /// it is non-empty.
    pub fn list_addresses(
        &self,
        zone_filter: &str,
        request: &PageRequest,
    ) -> Result<Page<String>, ExemptionError> {
        paginate(
            &self.store,
            keys::MEMBERSHIP_PREFIX,
            request,
            &self.config,
            |key, zone_name| {
                if !zone_filter.is_empty() && zone_name != zone_filter.as_bytes() {
                    return Ok(None);
                }
                let address = AccountAddress::from_slice(key)
                    .map_err(|e| ExemptionError::Serialization(e.to_string()))?;
                Ok(Some(address.to_string()))
            },
        )
    }
}
