//! Domain layer: pure types and rules, no I/O.

pub mod config;
pub mod decision;
pub mod genesis;
pub mod keys;
pub mod membership;
pub mod pagination;
pub mod zone;

pub use config::ExemptionConfig;
pub use decision::{decide, DecisionRule, ExemptionDecision};
pub use genesis::{AddressGroup, GenesisState};
pub use membership::{TransferParty, ZoneCache, ZoneMembership};
pub use pagination::{Page, PageRequest, PageResponse};
pub use zone::{validate_zone_name, Zone};
