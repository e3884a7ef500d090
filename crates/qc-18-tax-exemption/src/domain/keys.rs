//! Store key layout.
//!
//! ```text
//! 0x01 || zone_name_utf8      -> bincode(Zone)
//! 0x02 || address_bytes[20]   -> zone_name_utf8
//! ```
//!
//! The two namespaces never overlap, so each can be range-scanned alone.

use shared_types::AccountAddress;

/// Zone records keyed by name.
pub const ZONE_PREFIX: u8 = 0x01;

/// Membership records keyed by address.
pub const MEMBERSHIP_PREFIX: u8 = 0x02;

/// Store key for a zone record.
pub fn zone_key(name: &str) -> Vec<u8> {
    prefixed(ZONE_PREFIX, name.as_bytes())
}

/// Store key for a membership record.
pub fn membership_key(address: &AccountAddress) -> Vec<u8> {
    prefixed(MEMBERSHIP_PREFIX, address.as_bytes())
}

/// Prepend a namespace byte to a record key.
pub fn prefixed(prefix: u8, key: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(key.len() + 1);
    out.push(prefix);
    out.extend_from_slice(key);
    out
}
