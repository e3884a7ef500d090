//! Page request/response types for ordered listings.

use serde::{Deserialize, Serialize};

use crate::error::ExemptionError;

/// Paging parameters for a listing.
///
/// Either `key` (continuation) or `offset` may be set, not both.
/// `limit == 0` returns every remaining record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    /// Continuation key from a previous [`PageResponse::next_key`].
    #[serde(with = "hex_key")]
    pub key: Option<Vec<u8>>,
    /// Matching records to skip before the page starts.
    pub offset: u64,
    /// Maximum records in the page; 0 means no limit.
    pub limit: u64,
    /// Compute the total number of matching records.
    pub count_total: bool,
    /// Iterate in descending key order.
    pub reverse: bool,
}

impl PageRequest {
    /// Offset-based request.
    pub fn with_offset(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit,
            ..Self::default()
        }
    }

    /// Continue after a previous page.
    pub fn after(key: Vec<u8>, limit: u64) -> Self {
        Self {
            key: Some(key),
            limit,
            ..Self::default()
        }
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn counting_total(mut self) -> Self {
        self.count_total = true;
        self
    }

    /// Reject contradictory or oversized requests.
    ///
    /// `max_limit == 0` disables the size check.
    pub fn validate(&self, max_limit: u64) -> Result<(), ExemptionError> {
        if self.key.is_some() && self.offset > 0 {
            return Err(ExemptionError::InvalidPagination(
                "either offset or key is expected, got both".to_string(),
            ));
        }
        if max_limit > 0 && (self.limit == 0 || self.limit > max_limit) {
            return Err(ExemptionError::InvalidPagination(format!(
                "limit {} outside 1..={}",
                self.limit, max_limit
            )));
        }
        Ok(())
    }
}

/// Paging metadata returned with a listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageResponse {
    /// Key of the first record after this page; `None` at the end.
    #[serde(default, with = "hex_key")]
    pub next_key: Option<Vec<u8>>,
    /// Total matching records, when requested.
    pub total: Option<u64>,
}

/// A page of records plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PageResponse,
}

/// Continuation keys travel as hex strings.
mod hex_key {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(key: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match key {
            Some(bytes) => serializer.serialize_some(&hex::encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| hex::decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
