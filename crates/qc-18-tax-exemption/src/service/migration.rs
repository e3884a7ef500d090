//! Migration of a legacy flat exemption list into a zone.

use tracing::info;

use super::TaxExemptionService;
use crate::domain::Zone;
use crate::error::ExemptionError;
use crate::ports::outbound::KeyValueStore;

impl<S: KeyValueStore> TaxExemptionService<S> {
    /// Move a flat list of exempt addresses into `zone_name`.
    ///
    /// The zone is created (or reset) with every flag cleared, so migrated
    /// addresses are only exempt among themselves until an operator grants
    /// flags. Returns the number of addresses submitted.
    pub fn migrate_flat_exemption_list<A: AsRef<str>>(
        &mut self,
        zone_name: &str,
        legacy: &[A],
    ) -> Result<usize, ExemptionError> {
        self.add_zone_with_addresses(Zone::new(zone_name), legacy)?;
        info!(
            zone = %zone_name,
            addresses = legacy.len(),
            "[qc-18] Legacy exemption list migrated"
        );
        Ok(legacy.len())
    }
}
