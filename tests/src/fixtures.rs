//! Shared builders for tests and benchmarks.

use qc_18_tax_exemption::{InMemoryKVStore, TaxExemptionService, Zone};

/// Address with every byte set to `byte`.
pub fn addr(byte: u8) -> String {
    format!("0x{}", hex::encode([byte; 20]))
}

/// Distinct address for any index.
pub fn indexed_addr(index: u32) -> String {
    format!("0x{:040x}", index)
}

/// Registry with `zones` zones of `members` addresses each.
///
/// Zone `i` is named `zone-{i:04}`; its flags cycle through every combination
/// so decisions exercise all rules.
pub fn populated_service(zones: u32, members: u32) -> TaxExemptionService<InMemoryKVStore> {
    let mut service = TaxExemptionService::new(InMemoryKVStore::new());
    for z in 0..zones {
        let zone = Zone::new(format!("zone-{:04}", z))
            .with_outgoing(z & 1 != 0)
            .with_incoming(z & 2 != 0)
            .with_cross_zone(z & 4 != 0);
        let addresses: Vec<String> = (0..members)
            .map(|m| indexed_addr(z * members + m))
            .collect();
        if let Err(e) = service.add_zone_with_addresses(zone, &addresses) {
            panic!("fixture setup failed: {}", e);
        }
    }
    service
}
