//! # QC-18 Tax Exemption
//!
//! Zone-based levy exemption for value transfers.
//!
//! Addresses are grouped into named zones. Each zone carries three flags
//! (`outgoing`, `incoming`, `cross_zone`) that decide whether a transfer
//! between two addresses is exempt from the transfer levy.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure types and rules, no I/O
//!   - `Zone`, `ZoneMembership` (tagged present/absent resolution)
//!   - `decide`: the five-rule decision table
//!   - `PageRequest`/`PageResponse`, `GenesisState`, `ExemptionConfig`
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `TaxExemptionApi`: Driving port (inbound API)
//!   - `AuthorityVerifier`: Gate for mutating commands
//!   - `KeyValueStore`: Driven port (ordered key-value store)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `TaxExemptionService`: registry, membership index, decisions,
//!     listings, genesis, legacy migration
//!
//! - **Handler Layer** (`handler/`): Authority-gated commands and queries
//!
//! - **Events Layer** (`events/`): Request/response messages
//!
//! - **Adapters Layer** (`adapters/`): `InMemoryKVStore`, `FileBackedKVStore`
//!
//! ## Decision Table
//!
//! First matching rule wins:
//!
//! 1. Neither side in a zone: taxable
//! 2. Both sides in the same zone: exempt
//! 3. Only the sender in a zone: exempt iff `sender.outgoing`
//! 4. Only the recipient in a zone: exempt iff `recipient.incoming`
//! 5. Different zones: exempt iff `(sender.outgoing && sender.cross_zone)
//!    || (recipient.incoming && recipient.cross_zone)`
//!
//! ## Invariants
//!
//! - **One zone per address**: re-adding to the current zone is a no-op,
//!   adding to another zone fails.
//! - **No dangling memberships**: removing a zone deletes its memberships in
//!   the same atomic batch.
//! - **Decisions never fail**: unresolvable addresses count as outside any zone.
//!
//! ## Usage Example
//!
//! ```
//! use qc_18_tax_exemption::{InMemoryKVStore, TaxExemptionService, TransferParty, Zone};
//!
//! let mut service = TaxExemptionService::new(InMemoryKVStore::new());
//! service.add_zone(Zone::new("exchange").with_outgoing(true))?;
//!
//! let hot_wallet = format!("0x{}", "ab".repeat(20));
//! service.add_address("exchange", &hot_wallet)?;
//!
//! assert!(service.is_exempt(
//!     TransferParty::Address(&hot_wallet),
//!     TransferParty::Unspecified,
//! ));
//! # Ok::<(), qc_18_tax_exemption::ExemptionError>(())
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod events;
pub mod handler;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{FileBackedKVStore, InMemoryKVStore};
pub use domain::{
    AddressGroup, DecisionRule, ExemptionConfig, ExemptionDecision, GenesisState, Page,
    PageRequest, PageResponse, TransferParty, Zone, ZoneCache, ZoneMembership,
};
pub use error::{ErrorKind, ExemptionError};
pub use handler::{shared, SharedService, TaxExemptionCommandHandler, TaxExemptionQueryHandler};
pub use ports::{
    AuthorityVerifier, BatchOperation, FixedAuthority, KVStoreError, KeyValueStore,
    ScanDirection, ScanResult, TaxExemptionApi,
};
pub use service::TaxExemptionService;
