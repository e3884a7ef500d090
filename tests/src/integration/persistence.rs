//! # Persistence Flows
//!
//! State written through one process lifetime must be visible after reopen,
//! both for the bare file-backed store and for the node container.

#[cfg(test)]
mod tests {
    use node_runtime::config::{NodeConfig, StorageBackend};
    use node_runtime::NodeContainer;
    use qc_18_tax_exemption::events::{AddZoneRequest, TaxableRequest};
    use qc_18_tax_exemption::{
        FileBackedKVStore, KVStoreError, TaxExemptionService, TransferParty, Zone,
    };
    use tempfile::TempDir;

    use crate::fixtures::addr;

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exemption.db");

        {
            let store = FileBackedKVStore::open(&path).unwrap();
            let mut service = TaxExemptionService::new(store);
            service
                .add_zone_with_addresses(
                    Zone::new("exchange").with_outgoing(true),
                    &[addr(1), addr(2)],
                )
                .unwrap();
            service.remove_address("exchange", &addr(2)).unwrap();
        }

        let service = TaxExemptionService::new(FileBackedKVStore::open(&path).unwrap());
        let genesis = service.export_genesis().unwrap();
        assert_eq!(genesis.zone_list, vec![Zone::new("exchange").with_outgoing(true)]);
        assert_eq!(genesis.address_groups[0].addresses, vec![addr(1)]);
        assert!(service.is_exempt(TransferParty::Address(&addr(1)), TransferParty::Unspecified));
    }

    #[test]
    fn test_truncated_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exemption.db");
        {
            let mut service = TaxExemptionService::new(FileBackedKVStore::open(&path).unwrap());
            service.add_zone(Zone::new("exchange")).unwrap();
        }

        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() - 1]).unwrap();

        match FileBackedKVStore::open(&path) {
            Err(KVStoreError::CorruptionError { .. }) => {}
            Err(other) => panic!("expected corruption error, got {}", other),
            Ok(_) => panic!("truncated store opened"),
        }
    }

    #[test]
    fn test_node_container_reopens_file_backend() {
        let dir = TempDir::new().unwrap();
        let mut config = NodeConfig::default();
        config.storage.backend = StorageBackend::File;
        config.storage.data_dir = dir.path().to_path_buf();

        {
            let container = NodeContainer::open(&config).unwrap();
            container
                .commands
                .add_zone(&AddZoneRequest {
                    authority: config.exemption.authority.clone(),
                    zone: "merchants".to_string(),
                    outgoing: false,
                    incoming: true,
                    cross_zone: false,
                    addresses: vec![addr(3)],
                })
                .unwrap();
        }

        assert!(config.storage.file_path().exists());
        let container = NodeContainer::open(&config).unwrap();
        let response = container.queries.taxable(&TaxableRequest {
            from_address: addr(9),
            to_address: addr(3),
        });
        assert!(!response.taxable);
    }
}
