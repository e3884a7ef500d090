use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::adapters::memory::scan_map;
use crate::ports::outbound::{BatchOperation, KVStoreError, KeyValueStore, ScanDirection, ScanResult};

/// File-backed key-value store for nodes running without RocksDB.
///
/// Keeps the ordered map in memory and rewrites the whole file on every
/// commit (temp file, fsync, rename). Suitable for registries of modest size.
pub struct FileBackedKVStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
    path: PathBuf,
}

impl FileBackedKVStore {
    /// Open the store at `path`, loading any existing contents.
    ///
    /// A missing file yields an empty store. A truncated or malformed file
    /// is an error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, KVStoreError> {
        let path = path.as_ref().to_path_buf();

        let data = if path.exists() {
            let data = Self::load_from_file(&path)?;
            info!(
                "[qc-18] 💾 Loaded {} keys from {}",
                data.len(),
                path.display()
            );
            data
        } else {
            info!("[qc-18] 📁 No existing storage file at {}", path.display());
            BTreeMap::new()
        };

        Ok(Self { data, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_file(path: &Path) -> Result<BTreeMap<Vec<u8>, Vec<u8>>, KVStoreError> {
        let mut file = std::fs::File::open(path).map_err(io_error)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(io_error)?;

        // Format: [key_len:u32][key][value_len:u32][value]...
        let mut data = BTreeMap::new();
        let mut cursor = 0;

        while cursor < bytes.len() {
            let key = read_record(&bytes, &mut cursor)?;
            let value = read_record(&bytes, &mut cursor)?;
            data.insert(key, value);
        }

        Ok(data)
    }

    fn save_to_file(&self) -> Result<(), KVStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let mut bytes = Vec::new();
        for (key, value) in &self.data {
            write_record(&mut bytes, key)?;
            write_record(&mut bytes, value)?;
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(io_error)?;
        file.write_all(&bytes).map_err(io_error)?;
        file.sync_all().map_err(io_error)?;

        std::fs::rename(&temp_path, &self.path).map_err(io_error)?;

        Ok(())
    }
}

fn io_error(e: std::io::Error) -> KVStoreError {
    KVStoreError::IOError {
        message: e.to_string(),
    }
}

fn corruption(message: &str, offset: usize) -> KVStoreError {
    KVStoreError::CorruptionError {
        message: format!("{} at byte {}", message, offset),
    }
}

fn read_record(bytes: &[u8], cursor: &mut usize) -> Result<Vec<u8>, KVStoreError> {
    let header = bytes
        .get(*cursor..*cursor + 4)
        .ok_or_else(|| corruption("truncated length prefix", *cursor))?;
    let mut len_bytes = [0u8; 4];
    len_bytes.copy_from_slice(header);
    let len = u32::from_le_bytes(len_bytes) as usize;
    *cursor += 4;

    let record = bytes
        .get(*cursor..*cursor + len)
        .ok_or_else(|| corruption("truncated record", *cursor))?
        .to_vec();
    *cursor += len;
    Ok(record)
}

fn write_record(out: &mut Vec<u8>, record: &[u8]) -> Result<(), KVStoreError> {
    let len = u32::try_from(record.len()).map_err(|_| KVStoreError::IOError {
        message: format!("record of {} bytes exceeds u32 length prefix", record.len()),
    })?;
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(record);
    Ok(())
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.atomic_batch_write(vec![BatchOperation::put(key, value)])
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        self.atomic_batch_write(vec![BatchOperation::delete(key)])
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        let mut next = self.data.clone();
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    next.insert(key, value);
                }
                BatchOperation::Delete { key } => {
                    next.remove(&key);
                }
            }
        }

        // Memory only moves forward once the file is durable.
        let previous = std::mem::replace(&mut self.data, next);
        if let Err(e) = self.save_to_file() {
            self.data = previous;
            return Err(e);
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
