//! # Production Storage Adapters
//!
//! Production-ready storage backend using RocksDB.
//!
//! ## Usage
//!
//! Enable the `rocksdb` feature to use this adapter:
//!
//! ```toml
//! node-runtime = { path = "...", features = ["rocksdb"] }
//! ```
//!
//! Without it the node runs on the in-memory or file-backed stores shipped
//! with `qc-18-tax-exemption`.

#[cfg(feature = "rocksdb")]
pub mod rocksdb_adapter;

#[cfg(feature = "rocksdb")]
pub use rocksdb_adapter::{RocksDbConfig, RocksDbStore};

// Re-export the embedded adapters
pub use qc_18_tax_exemption::adapters::{FileBackedKVStore, InMemoryKVStore};
