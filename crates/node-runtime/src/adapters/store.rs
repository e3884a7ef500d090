//! Backend-erased store the node hands to the tax exemption service.
//!
//! The backend is a runtime choice, so the service is instantiated once over
//! this enum instead of once per backend.

use qc_18_tax_exemption::ports::outbound::{
    BatchOperation, KVStoreError, KeyValueStore, ScanDirection, ScanResult,
};

#[cfg(feature = "rocksdb")]
use super::storage::RocksDbStore;
use super::storage::{FileBackedKVStore, InMemoryKVStore};

/// One of the configured storage backends.
pub enum NodeStore {
    Memory(InMemoryKVStore),
    File(FileBackedKVStore),
    #[cfg(feature = "rocksdb")]
    RocksDb(RocksDbStore),
}

impl NodeStore {
    /// Short backend name for logs.
    pub fn backend_name(&self) -> &'static str {
        match self {
            NodeStore::Memory(_) => "memory",
            NodeStore::File(_) => "file",
            #[cfg(feature = "rocksdb")]
            NodeStore::RocksDb(_) => "rocksdb",
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $store:ident => $call:expr) => {
        match $self {
            NodeStore::Memory($store) => $call,
            NodeStore::File($store) => $call,
            #[cfg(feature = "rocksdb")]
            NodeStore::RocksDb($store) => $call,
        }
    };
}

impl KeyValueStore for NodeStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        dispatch!(self, store => store.get(key))
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        dispatch!(self, store => store.put(key, value))
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        dispatch!(self, store => store.delete(key))
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        dispatch!(self, store => store.atomic_batch_write(operations))
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        dispatch!(self, store => store.exists(key))
    }

    fn range_scan(
        &self,
        start: &[u8],
        end: Option<&[u8]>,
        direction: ScanDirection,
        limit: usize,
    ) -> Result<ScanResult, KVStoreError> {
        dispatch!(self, store => store.range_scan(start, end, direction, limit))
    }
}
