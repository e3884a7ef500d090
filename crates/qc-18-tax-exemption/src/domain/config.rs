//! Subsystem configuration.

use serde::{Deserialize, Serialize};

use crate::error::ExemptionError;

/// Default governance account allowed to mutate the registry.
pub const DEFAULT_AUTHORITY: &str = "gov";

/// Default number of entries fetched per store round-trip while paging.
pub const DEFAULT_SCAN_BATCH_SIZE: usize = 128;

/// Tax exemption configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptionConfig {
    /// Identity every mutating command must carry.
    pub authority: String,
    /// Largest accepted page size; 0 disables the cap.
    pub max_page_limit: u64,
    /// Store entries fetched per scan round-trip.
    pub scan_batch_size: usize,
}

impl Default for ExemptionConfig {
    fn default() -> Self {
        Self {
            authority: DEFAULT_AUTHORITY.to_string(),
            max_page_limit: 0,
            scan_batch_size: DEFAULT_SCAN_BATCH_SIZE,
        }
    }
}

impl ExemptionConfig {
    pub fn validate(&self) -> Result<(), ExemptionError> {
        if self.authority.is_empty() {
            return Err(ExemptionError::InvalidConfig(
                "authority cannot be empty".to_string(),
            ));
        }
        if self.scan_batch_size == 0 {
            return Err(ExemptionError::InvalidConfig(
                "scan batch size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = authority.into();
        self
    }

    pub fn with_max_page_limit(mut self, limit: u64) -> Self {
        self.max_page_limit = limit;
        self
    }

    pub fn with_scan_batch_size(mut self, size: usize) -> Self {
        self.scan_batch_size = size;
        self
    }
}
