//! # Core Domain Entities
//!
//! Account identity used by the ledger: a 20-byte address rendered as
//! `0x` followed by 40 hex digits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AddressError;

/// A 20-byte account address.
pub type Address = [u8; 20];

/// Length of an [`Address`] in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// Prefix every textual address carries.
pub const ADDRESS_PREFIX: &str = "0x";

/// A validated account address.
///
/// Parsing accepts either hex case; `Display` always renders lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountAddress(Address);

impl AccountAddress {
    /// Wrap raw address bytes.
    pub const fn new(bytes: Address) -> Self {
        Self(bytes)
    }

    /// Parse and validate a textual address.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        if input.is_empty() {
            return Err(AddressError::Empty);
        }

        let body = input
            .strip_prefix(ADDRESS_PREFIX)
            .or_else(|| input.strip_prefix("0X"))
            .ok_or_else(|| AddressError::MissingPrefix(input.to_string()))?;

        let decoded = hex::decode(body).map_err(|e| AddressError::InvalidHex {
            address: input.to_string(),
            reason: e.to_string(),
        })?;

        let bytes: Address =
            decoded
                .as_slice()
                .try_into()
                .map_err(|_| AddressError::InvalidLength {
                    expected: ADDRESS_LENGTH,
                    actual: decoded.len(),
                })?;

        Ok(Self(bytes))
    }

    /// Rebuild an address from a stored key.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let bytes: Address = bytes.try_into().map_err(|_| AddressError::InvalidLength {
            expected: ADDRESS_LENGTH,
            actual: bytes.len(),
        })?;
        Ok(Self(bytes))
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &Address {
        &self.0
    }
}

/// Check that `input` is a well-formed account address.
pub fn validate_address(input: &str) -> Result<(), AddressError> {
    AccountAddress::parse(input).map(|_| ())
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ADDRESS_PREFIX, hex::encode(self.0))
    }
}

impl FromStr for AccountAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Address> for AccountAddress {
    fn from(bytes: Address) -> Self {
        Self(bytes)
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_lowercase() {
        let addr = AccountAddress::parse("0x00000000000000000000000000000000000000ab").unwrap();
        assert_eq!(addr.as_bytes()[19], 0xab);
    }

    #[test]
    fn test_parse_mixed_case_is_canonicalized() {
        let addr = AccountAddress::parse("0xABCDEF0123456789abcdef0123456789ABCDEF01").unwrap();
        assert_eq!(
            addr.to_string(),
            "0xabcdef0123456789abcdef0123456789abcdef01"
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(AccountAddress::parse(""), Err(AddressError::Empty));
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        let err = AccountAddress::parse("00000000000000000000000000000000000000ab").unwrap_err();
        assert!(matches!(err, AddressError::MissingPrefix(_)));
    }

    #[test]
    fn test_parse_rejects_bad_hex() {
        let err = AccountAddress::parse("0xzz000000000000000000000000000000000000ab").unwrap_err();
        assert!(matches!(err, AddressError::InvalidHex { .. }));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = AccountAddress::parse("0xabcd").unwrap_err();
        assert_eq!(
            err,
            AddressError::InvalidLength {
                expected: 20,
                actual: 2
            }
        );
    }

    #[test]
    fn test_from_slice_rejects_short_key() {
        assert!(AccountAddress::from_slice(&[1, 2, 3]).is_err());
        assert!(AccountAddress::from_slice(&[7u8; 20]).is_ok());
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let addr = AccountAddress::new([0xAB; 20]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "ab".repeat(20)));

        let back: AccountAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    proptest! {
        #[test]
        fn prop_display_then_parse_is_identity(bytes in proptest::array::uniform20(any::<u8>())) {
            let addr = AccountAddress::new(bytes);
            prop_assert_eq!(AccountAddress::parse(&addr.to_string()).unwrap(), addr);
        }

        #[test]
        fn prop_byte_order_matches_string_order(
            a in proptest::array::uniform20(any::<u8>()),
            b in proptest::array::uniform20(any::<u8>()),
        ) {
            let (x, y) = (AccountAddress::new(a), AccountAddress::new(b));
            prop_assert_eq!(x.cmp(&y), x.to_string().cmp(&y.to_string()));
        }
    }
}
