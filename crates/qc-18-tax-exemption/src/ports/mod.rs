//! Ports (Hexagonal Architecture)

pub mod inbound;
pub mod outbound;

pub use inbound::{AuthorityVerifier, FixedAuthority, TaxExemptionApi};
pub use outbound::{BatchOperation, KVStoreError, KeyValueStore, ScanDirection, ScanResult};
