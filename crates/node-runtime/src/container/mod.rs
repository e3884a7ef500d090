//! # Subsystem Container
//!
//! Opens the configured store and wires the tax exemption service into its
//! command and query handlers. Both handlers share one service instance.

use anyhow::{Context, Result};
use tracing::info;

use qc_18_tax_exemption::{
    shared, SharedService, TaxExemptionCommandHandler, TaxExemptionQueryHandler,
    TaxExemptionService,
};

use crate::adapters::storage::{FileBackedKVStore, InMemoryKVStore};
use crate::adapters::NodeStore;
use crate::config::{NodeConfig, StorageBackend, StorageConfig};

/// Initialized subsystem handles.
pub struct NodeContainer {
    pub service: SharedService<NodeStore>,
    pub commands: TaxExemptionCommandHandler<NodeStore>,
    pub queries: TaxExemptionQueryHandler<NodeStore>,
}

impl NodeContainer {
    /// Open storage and build the handlers.
    pub fn open(config: &NodeConfig) -> Result<Self> {
        let store = open_store(&config.storage)?;
        let backend = store.backend_name();

        let service = TaxExemptionService::with_config(store, config.exemption.clone())
            .context("Invalid tax exemption configuration")?;
        let service = shared(service);

        info!(
            backend,
            data_dir = %config.storage.data_dir.display(),
            authority = %config.exemption.authority,
            "[qc-18] Tax exemption subsystem ready"
        );

        Ok(Self {
            commands: TaxExemptionCommandHandler::new(service.clone()),
            queries: TaxExemptionQueryHandler::new(service.clone()),
            service,
        })
    }
}

/// Open the backend named in `config`.
pub fn open_store(config: &StorageConfig) -> Result<NodeStore> {
    match config.backend {
        StorageBackend::Memory => Ok(NodeStore::Memory(InMemoryKVStore::new())),
        StorageBackend::File => {
            let path = config.file_path();
            let store = FileBackedKVStore::open(&path)
                .with_context(|| format!("Failed to open store at {}", path.display()))?;
            Ok(NodeStore::File(store))
        }
        StorageBackend::RocksDb => open_rocksdb(config),
    }
}

#[cfg(feature = "rocksdb")]
fn open_rocksdb(config: &StorageConfig) -> Result<NodeStore> {
    use crate::adapters::storage::RocksDbStore;

    let path = config.rocksdb_path();
    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("Failed to create {}", config.data_dir.display()))?;
    let store = RocksDbStore::open_default(&path)
        .with_context(|| format!("Failed to open RocksDB at {}", path.display()))?;
    Ok(NodeStore::RocksDb(store))
}

#[cfg(not(feature = "rocksdb"))]
fn open_rocksdb(_config: &StorageConfig) -> Result<NodeStore> {
    Err(crate::config::ConfigError::BackendNotCompiled.into())
}
