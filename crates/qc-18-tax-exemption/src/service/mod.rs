//! Tax Exemption Service
//!
//! Orchestrates the registry, membership index, decision engine, listing,
//! and genesis routines over one ordered key-value store.

mod exemption;
mod genesis;
mod listing;
mod membership;
mod migration;
mod paginator;
mod registry;

use shared_types::AccountAddress;

use crate::domain::{
    keys, ExemptionConfig, ExemptionDecision, GenesisState, Page, PageRequest, TransferParty,
    Zone,
};
use crate::error::ExemptionError;
use crate::ports::{KeyValueStore, TaxExemptionApi};

/// Tax exemption service implementation
///
/// Implements the `TaxExemptionApi` port over an injected store.
pub struct TaxExemptionService<S: KeyValueStore> {
    /// Ordered key-value store (driven port)
    store: S,
    config: ExemptionConfig,
}

impl<S: KeyValueStore> TaxExemptionService<S> {
    /// Create a new service with default configuration
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: ExemptionConfig::default(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(store: S, config: ExemptionConfig) -> Result<Self, ExemptionError> {
        config.validate()?;
        Ok(Self { store, config })
    }

    pub fn config(&self) -> &ExemptionConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn load_zone(&self, name: &str) -> Result<Option<Zone>, ExemptionError> {
        match self.store.get(&keys::zone_key(name))? {
            Some(bytes) => Ok(Some(bincode::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    fn zone_exists(&self, name: &str) -> Result<bool, ExemptionError> {
        Ok(self.store.exists(&keys::zone_key(name))?)
    }

    fn require_zone(&self, name: &str) -> Result<(), ExemptionError> {
        if !self.zone_exists(name)? {
            return Err(ExemptionError::ZoneNotFound(name.to_string()));
        }
        Ok(())
    }

    /// Zone name an address is mapped to, if any.
    fn membership_of(&self, address: &AccountAddress) -> Result<Option<String>, ExemptionError> {
        self.store
            .get(&keys::membership_key(address))?
            .map(decode_zone_name)
            .transpose()
    }
}

fn decode_zone_name(bytes: Vec<u8>) -> Result<String, ExemptionError> {
    String::from_utf8(bytes).map_err(|e| ExemptionError::Serialization(e.to_string()))
}

impl<S: KeyValueStore> TaxExemptionApi for TaxExemptionService<S> {
    fn add_zone(&mut self, zone: Zone) -> Result<(), ExemptionError> {
        TaxExemptionService::add_zone(self, zone)
    }

    fn modify_zone(&mut self, zone: Zone) -> Result<(), ExemptionError> {
        TaxExemptionService::modify_zone(self, zone)
    }

    fn remove_zone(&mut self, name: &str) -> Result<(), ExemptionError> {
        TaxExemptionService::remove_zone(self, name)
    }

    fn get_zone(&self, name: &str) -> Result<Zone, ExemptionError> {
        TaxExemptionService::get_zone(self, name)
    }

    fn add_address(&mut self, zone_name: &str, address: &str) -> Result<(), ExemptionError> {
        TaxExemptionService::add_address(self, zone_name, address)
    }

    fn remove_address(&mut self, zone_name: &str, address: &str) -> Result<(), ExemptionError> {
        TaxExemptionService::remove_address(self, zone_name, address)
    }

    fn evaluate(&self, sender: TransferParty<'_>, recipient: TransferParty<'_>) -> ExemptionDecision {
        TaxExemptionService::evaluate(self, sender, recipient)
    }

    fn list_zones(&self, request: &PageRequest) -> Result<Page<Zone>, ExemptionError> {
        TaxExemptionService::list_zones(self, request)
    }

    fn list_addresses(
        &self,
        zone_filter: &str,
        request: &PageRequest,
    ) -> Result<Page<String>, ExemptionError> {
        TaxExemptionService::list_addresses(self, zone_filter, request)
    }

    fn import_genesis(&mut self, genesis: &GenesisState) -> Result<(), ExemptionError> {
        TaxExemptionService::import_genesis(self, genesis)
    }

    fn export_genesis(&self) -> Result<GenesisState, ExemptionError> {
        TaxExemptionService::export_genesis(self)
    }
}
