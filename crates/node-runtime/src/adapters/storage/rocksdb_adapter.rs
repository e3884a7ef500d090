//! # RocksDB Storage Adapter
//!
//! Production-ready RocksDB implementation of the KeyValueStore trait.
//!
//! ## Features
//!
//! - Atomic batch writes (WriteBatch)
//! - Forward and reverse range scans over raw iterators
//! - Snappy compression
//! - Bloom filters for point lookups (membership resolution)
//! - Write-ahead logging for durability
//!
//! ## Key Layout
//!
//! Everything lives in the default column family. The subsystem's key
//! prefixes (`0x01` zones, `0x02` memberships) keep namespaces apart and
//! RocksDB's bytewise comparator gives the scan order the paginator needs.

use parking_lot::RwLock;
use qc_18_tax_exemption::ports::outbound::{
    BatchOperation, KVStoreError, KeyValueStore, ScanDirection, ScanResult,
};
use rocksdb::{Direction, IteratorMode, Options, WriteBatch, WriteOptions, DB};
use std::path::Path;
use std::sync::Arc;

/// RocksDB configuration for production use
#[derive(Debug, Clone)]
pub struct RocksDbConfig {
    /// Path to the database directory
    pub path: String,
    /// Block cache size in bytes (default: 64MB)
    pub block_cache_size: usize,
    /// Write buffer size in bytes (default: 16MB)
    pub write_buffer_size: usize,
    /// Maximum number of write buffers (default: 3)
    pub max_write_buffer_number: i32,
    /// Enable fsync after each write (default: true for durability)
    pub sync_writes: bool,
}

impl Default for RocksDbConfig {
    fn default() -> Self {
        Self {
            path: "./data/rocksdb".to_string(),
            block_cache_size: 64 * 1024 * 1024, // 64MB
            write_buffer_size: 16 * 1024 * 1024, // 16MB
            max_write_buffer_number: 3,
            sync_writes: true,
        }
    }
}

impl RocksDbConfig {
    /// Create config for testing (smaller buffers, no sync)
    pub fn for_testing(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            block_cache_size: 8 * 1024 * 1024,  // 8MB
            write_buffer_size: 4 * 1024 * 1024, // 4MB
            max_write_buffer_number: 2,
            sync_writes: false,
        }
    }
}

/// RocksDB-backed key-value store implementing the KeyValueStore trait
pub struct RocksDbStore {
    db: Arc<RwLock<DB>>,
    config: RocksDbConfig,
}

impl RocksDbStore {
    /// Open or create a RocksDB database
    pub fn open(config: RocksDbConfig) -> Result<Self, KVStoreError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        // Performance tuning
        opts.set_write_buffer_size(config.write_buffer_size);
        opts.set_max_write_buffer_number(config.max_write_buffer_number);

        // Compression
        opts.set_compression_type(rocksdb::DBCompressionType::Snappy);

        // Bloom filter for faster lookups
        let mut block_opts = rocksdb::BlockBasedOptions::default();
        block_opts.set_bloom_filter(10.0, false);
        block_opts.set_block_cache(&rocksdb::Cache::new_lru_cache(config.block_cache_size));
        opts.set_block_based_table_factory(&block_opts);

        let db = DB::open(&opts, &config.path).map_err(|e| KVStoreError::IOError {
            message: format!("Failed to open RocksDB: {}", e),
        })?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
            config,
        })
    }

    /// Open with default tuning at `path`
    pub fn open_default(path: impl AsRef<Path>) -> Result<Self, KVStoreError> {
        let config = RocksDbConfig {
            path: path.as_ref().to_string_lossy().to_string(),
            ..Default::default()
        };
        Self::open(config)
    }

    fn write_options(&self) -> WriteOptions {
        let mut write_opts = WriteOptions::default();
        write_opts.set_sync(self.config.sync_writes);
        write_opts
    }
}

impl KeyValueStore for RocksDbStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        let db = self.db.read();
        db.get(key).map_err(|e| KVStoreError::IOError {
            message: format!("RocksDB get failed: {}", e),
        })
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        let write_opts = self.write_options();
        let db = self.db.write();
        db.put_opt(key, value, &write_opts)
            .map_err(|e| KVStoreError::IOError {
                message: format!("RocksDB put failed: {}", e),
            })
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        let write_opts = self.write_options();
        let db = self.db.write();
        db.delete_opt(key, &write_opts)
            .map_err(|e| KVStoreError::IOError {
                message: format!("RocksDB delete failed: {}", e),
            })
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        let write_opts = self.write_options();
        let db = self.db.write();
        let mut batch = WriteBatch::default();

        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    batch.put(&key, &value);
                }
                BatchOperation::Delete { key } => {
                    batch.delete(&key);
                }
            }
        }

        db.write_opt(batch, &write_opts)
            .map_err(|e| KVStoreError::IOError {
                message: format!("RocksDB batch write failed: {}", e),
            })
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        let db = self.db.read();
        db.get_pinned(key)
            .map(|v| v.is_some())
            .map_err(|e| KVStoreError::IOError {
                message: format!("RocksDB exists check failed: {}", e),
            })
    }

    fn range_scan(
        &self,
        start: &[u8],
        end: Option<&[u8]>,
        direction: ScanDirection,
        limit: usize,
    ) -> Result<ScanResult, KVStoreError> {
        let mut results = Vec::new();
        if limit == 0 || end.is_some_and(|end| start >= end) {
            return Ok(results);
        }

        let db = self.db.read();
        let mode = match (direction, end) {
            (ScanDirection::Forward, _) => IteratorMode::From(start, Direction::Forward),
            // Seeks to the last key <= end; `end` itself is skipped below
            (ScanDirection::Reverse, Some(end)) => IteratorMode::From(end, Direction::Reverse),
            (ScanDirection::Reverse, None) => IteratorMode::End,
        };

        for item in db.iterator(mode) {
            let (key, value) = item.map_err(|e| KVStoreError::IOError {
                message: format!("RocksDB scan failed: {}", e),
            })?;
            let past_end = end.is_some_and(|end| key.as_ref() >= end);

            match direction {
                ScanDirection::Forward if past_end => break,
                ScanDirection::Reverse if past_end => continue,
                ScanDirection::Reverse if key.as_ref() < start => break,
                _ => {}
            }

            results.push((key.to_vec(), value.to_vec()));
            if results.len() >= limit {
                break;
            }
        }

        Ok(results)
    }
}
