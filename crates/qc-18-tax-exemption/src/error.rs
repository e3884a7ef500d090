//! Error types for the Tax Exemption subsystem

use shared_types::AddressError;
use thiserror::Error;

use crate::events::error_codes;
use crate::ports::outbound::KVStoreError;

/// Coarse classification of an [`ExemptionError`].
///
/// Callers branch on the kind, never on the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty zone name, malformed address, malformed pagination bounds.
    InvalidArgument,
    /// Zone or membership does not exist, or belongs to a different zone.
    NotFound,
    /// Address is already bound to a different zone.
    AlreadyAssociated,
    /// Genesis zone list and address groups differ in length.
    ZoneLengthInvalid,
    /// Genesis address group names a zone missing from the zone list.
    ZoneNotExist,
    /// Caller is not the configured authority.
    Unauthorized,
    /// Store, codec, or internal consistency failure.
    Internal,
}

/// Errors that can occur in the Tax Exemption subsystem
#[derive(Debug, Error)]
pub enum ExemptionError {
    #[error("zone name cannot be empty")]
    EmptyZoneName,

    #[error("invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error("invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("no such zone in exemption list: {0}")]
    ZoneNotFound(String),

    #[error("no such address in exemption list: {address} (zone {zone})")]
    AddressNotFound { address: String, zone: String },

    #[error("address {address} is already associated with zone {zone}")]
    AlreadyAssociated { address: String, zone: String },

    #[error("length of zone list and addresses by zone must be equal: {zones} zones, {groups} groups")]
    ZoneLengthInvalid { zones: usize, groups: usize },

    #[error("zone not exist: {0}")]
    ZoneNotExist(String),

    #[error("invalid authority; expected {expected}, got {actual}")]
    Unauthorized { expected: String, actual: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("storage error: {0}")]
    Storage(#[from] KVStoreError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("exported state failed validation: {0}")]
    StateCorrupted(String),
}

impl ExemptionError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyZoneName
            | Self::InvalidAddress(_)
            | Self::InvalidPagination(_)
            | Self::InvalidConfig(_) => ErrorKind::InvalidArgument,
            Self::ZoneNotFound(_) | Self::AddressNotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyAssociated { .. } => ErrorKind::AlreadyAssociated,
            Self::ZoneLengthInvalid { .. } => ErrorKind::ZoneLengthInvalid,
            Self::ZoneNotExist(_) => ErrorKind::ZoneNotExist,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::Serialization(_) | Self::Storage(_) | Self::StateCorrupted(_) => {
                ErrorKind::Internal
            }
        }
    }

    /// Stable numeric code for error responses.
    pub fn code(&self) -> u32 {
        match self {
            Self::ZoneNotFound(_) => error_codes::ZONE_NOT_FOUND,
            Self::AddressNotFound { .. } => error_codes::ADDRESS_NOT_FOUND,
            Self::ZoneNotExist(_) => error_codes::ZONE_NOT_EXIST,
            Self::ZoneLengthInvalid { .. } => error_codes::ZONE_LENGTH_INVALID,
            Self::EmptyZoneName => error_codes::EMPTY_ZONE_NAME,
            Self::InvalidAddress(_) => error_codes::INVALID_ADDRESS,
            Self::InvalidPagination(_) => error_codes::INVALID_PAGINATION,
            Self::InvalidConfig(_) => error_codes::INVALID_CONFIG,
            Self::AlreadyAssociated { .. } => error_codes::ALREADY_ASSOCIATED,
            Self::Unauthorized { .. } => error_codes::UNAUTHORIZED,
            Self::Serialization(_) | Self::Storage(_) => error_codes::INTERNAL,
            Self::StateCorrupted(_) => error_codes::STATE_CORRUPTED,
        }
    }
}

impl From<bincode::Error> for ExemptionError {
    fn from(err: bincode::Error) -> Self {
        ExemptionError::Serialization(err.to_string())
    }
}
