//! In-memory key-value store.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::ports::outbound::{BatchOperation, KVStoreError, KeyValueStore, ScanDirection, ScanResult};

/// Ordered in-memory store for unit tests and ephemeral nodes.
///
/// Batches apply under `&mut self`, so no reader sees half a batch.
#[derive(Default, Debug, Clone)]
pub struct InMemoryKVStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl InMemoryKVStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Scan an ordered map. Shared with the file-backed store.
pub(crate) fn scan_map(
    data: &BTreeMap<Vec<u8>, Vec<u8>>,
    start: &[u8],
    end: Option<&[u8]>,
    direction: ScanDirection,
    limit: usize,
) -> ScanResult {
    if let Some(end) = end {
        if start >= end {
            return Vec::new();
        }
    }

    let upper = match end {
        Some(end) => Bound::Excluded(end.to_vec()),
        None => Bound::Unbounded,
    };
    let range = data.range((Bound::Included(start.to_vec()), upper));
    let clone = |(k, v): (&Vec<u8>, &Vec<u8>)| (k.clone(), v.clone());

    match direction {
        ScanDirection::Forward => range.take(limit).map(clone).collect(),
        ScanDirection::Reverse => range.rev().take(limit).map(clone).collect(),
    }
}

impl KeyValueStore for InMemoryKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.data.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        self.data.remove(key);
        Ok(())
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    self.data.insert(key, value);
                }
                BatchOperation::Delete { key } => {
                    self.data.remove(&key);
                }
            }
        }
        Ok(())
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(self.data.contains_key(key))
    }

    fn range_scan(
        &self,
        start: &[u8],
        end: Option<&[u8]>,
        direction: ScanDirection,
        limit: usize,
    ) -> Result<ScanResult, KVStoreError> {
        Ok(scan_map(&self.data, start, end, direction, limit))
    }
}
