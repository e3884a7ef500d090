//! Zone resolution for one side of a transfer.

use std::collections::HashMap;

use crate::domain::zone::Zone;

/// Call-scoped memo of zone records keyed by zone name.
///
/// Owned by the caller of a single operation and dropped with it.
pub type ZoneCache = HashMap<String, Zone>;

/// One side of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferParty<'a> {
    /// A concrete address string.
    Address(&'a str),
    /// The side is not known to the caller.
    Unspecified,
}

impl<'a> TransferParty<'a> {
    /// Treat the empty string as [`TransferParty::Unspecified`].
    pub fn from_optional(address: &'a str) -> Self {
        if address.is_empty() {
            TransferParty::Unspecified
        } else {
            TransferParty::Address(address)
        }
    }
}

impl<'a> From<Option<&'a str>> for TransferParty<'a> {
    fn from(address: Option<&'a str>) -> Self {
        match address {
            Some(addr) => TransferParty::from_optional(addr),
            None => TransferParty::Unspecified,
        }
    }
}

/// Resolved zone of one transfer side.
///
/// Absent is a distinct state, never a zone with all flags cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneMembership {
    /// Address belongs to this zone.
    Present(Zone),
    /// Unspecified side, or address without a membership.
    Absent,
}

impl ZoneMembership {
    /// The resolved zone, if any.
    pub fn zone(&self) -> Option<&Zone> {
        match self {
            ZoneMembership::Present(zone) => Some(zone),
            ZoneMembership::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, ZoneMembership::Present(_))
    }
}

impl From<Option<Zone>> for ZoneMembership {
    fn from(zone: Option<Zone>) -> Self {
        zone.map_or(ZoneMembership::Absent, ZoneMembership::Present)
    }
}
