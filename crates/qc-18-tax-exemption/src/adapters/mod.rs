//! Store adapters.

pub mod file;
pub mod memory;

pub use file::FileBackedKVStore;
pub use memory::InMemoryKVStore;
