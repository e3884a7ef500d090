//! # Node Configuration
//!
//! Unified configuration for storage, the tax exemption subsystem and logging.
//!
//! ## Precedence
//!
//! `NodeConfig::default()`, then environment variables, then command-line
//! flags. Later layers override earlier ones.
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `QC_DATA_DIR` | storage directory |
//! | `QC_STORAGE_BACKEND` | `memory`, `file` or `rocksdb` |
//! | `QC_TAX_AUTHORITY` | governance identity allowed to mutate |
//! | `QC_MAX_PAGE_LIMIT` | largest accepted page size (0 = unbounded) |

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use qc_18_tax_exemption::ExemptionConfig;
use quantum_telemetry::TelemetryConfig;
use thiserror::Error;

/// File name of the file-backed store inside the data directory.
pub const FILE_STORE_NAME: &str = "qc-18-tax-exemption.db";

/// Directory name of the RocksDB store inside the data directory.
pub const ROCKSDB_DIR_NAME: &str = "qc-18-rocksdb";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown storage backend '{0}' (expected memory, file or rocksdb)")]
    UnknownBackend(String),

    #[error("invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },

    #[error("storage backend 'rocksdb' requires building node-runtime with --features rocksdb")]
    BackendNotCompiled,
}

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StorageBackend {
    /// Ephemeral; state is lost when the process exits.
    Memory,
    /// Single file rewritten on every commit.
    #[default]
    File,
    /// RocksDB (requires the `rocksdb` feature).
    #[value(name = "rocksdb")]
    RocksDb,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageBackend::Memory => "memory",
            StorageBackend::File => "file",
            StorageBackend::RocksDb => "rocksdb",
        };
        f.write_str(name)
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "rocksdb" | "rocks" => Ok(StorageBackend::RocksDb),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Data directory holding the store.
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: PathBuf::from("./data"),
        }
    }
}

impl StorageConfig {
    pub fn file_path(&self) -> PathBuf {
        self.data_dir.join(FILE_STORE_NAME)
    }

    pub fn rocksdb_path(&self) -> PathBuf {
        self.data_dir.join(ROCKSDB_DIR_NAME)
    }
}

/// Complete node configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Tax exemption subsystem configuration.
    pub exemption: ExemptionConfig,
    /// Logging configuration.
    pub telemetry: TelemetryConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            exemption: ExemptionConfig::default(),
            telemetry: TelemetryConfig::for_service("node-runtime"),
        }
    }
}

/// Values supplied on the command line; `None` keeps the lower layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub backend: Option<StorageBackend>,
    pub authority: Option<String>,
}

impl NodeConfig {
    /// Apply environment overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("QC_DATA_DIR") {
            self.storage.data_dir = PathBuf::from(dir);
        }
        if let Some(backend) = lookup("QC_STORAGE_BACKEND") {
            self.storage.backend = backend.parse()?;
        }
        if let Some(authority) = lookup("QC_TAX_AUTHORITY") {
            self.exemption.authority = authority;
        }
        if let Some(limit) = lookup("QC_MAX_PAGE_LIMIT") {
            self.exemption.max_page_limit =
                limit.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    var: "QC_MAX_PAGE_LIMIT",
                    value: limit.clone(),
                })?;
        }
        Ok(())
    }

    /// Apply command-line overrides.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(dir) = overrides.data_dir {
            self.storage.data_dir = dir;
        }
        if let Some(backend) = overrides.backend {
            self.storage.backend = backend;
        }
        if let Some(authority) = overrides.authority {
            self.exemption.authority = authority;
        }
    }
}

/// Load configuration from defaults, the process environment and `overrides`.
pub fn load_config(overrides: ConfigOverrides) -> Result<NodeConfig, ConfigError> {
    let mut config = NodeConfig::default();
    config.apply_env(|var| std::env::var(var).ok())?;
    config.apply_overrides(overrides);
    Ok(config)
}
