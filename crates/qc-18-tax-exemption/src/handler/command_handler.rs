//! Command Handler
//!
//! Gates every mutating message:
//! - `validate_basic()` on the message (non-empty zone name)
//! - signer must pass the `AuthorityVerifier`
//! - the service re-checks its own argument invariants

use tracing::{debug, warn};

use super::SharedService;
use crate::error::ExemptionError;
use crate::events::{
    AddAddressesRequest, AddZoneRequest, ModifyZoneRequest, RemoveAddressesRequest,
    RemoveZoneRequest,
};
use crate::ports::{AuthorityVerifier, FixedAuthority, KeyValueStore};

/// Handler for authority-gated mutations.
pub struct TaxExemptionCommandHandler<S: KeyValueStore, V: AuthorityVerifier = FixedAuthority> {
    service: SharedService<S>,
    verifier: V,
}

impl<S: KeyValueStore> TaxExemptionCommandHandler<S, FixedAuthority> {
    /// Accept the authority configured on the service.
    pub fn new(service: SharedService<S>) -> Self {
        let verifier = FixedAuthority::new(service.read().config().authority.clone());
        Self { service, verifier }
    }
}

impl<S: KeyValueStore, V: AuthorityVerifier> TaxExemptionCommandHandler<S, V> {
    /// Use a custom authority check.
    pub fn with_verifier(service: SharedService<S>, verifier: V) -> Self {
        Self { service, verifier }
    }

    pub fn add_zone(&self, msg: &AddZoneRequest) -> Result<(), ExemptionError> {
        msg.validate_basic()?;
        self.authorize(&msg.authority, "AddZone")?;

        let mut service = self.service.write();
        if msg.addresses.is_empty() {
            service.add_zone(msg.to_zone())
        } else {
            service.add_zone_with_addresses(msg.to_zone(), &msg.addresses)
        }
    }

    pub fn modify_zone(&self, msg: &ModifyZoneRequest) -> Result<(), ExemptionError> {
        msg.validate_basic()?;
        self.authorize(&msg.authority, "ModifyZone")?;
        self.service.write().modify_zone(msg.to_zone())
    }

    pub fn remove_zone(&self, msg: &RemoveZoneRequest) -> Result<(), ExemptionError> {
        msg.validate_basic()?;
        self.authorize(&msg.authority, "RemoveZone")?;
        self.service.write().remove_zone(&msg.zone)
    }

    pub fn add_addresses(&self, msg: &AddAddressesRequest) -> Result<(), ExemptionError> {
        msg.validate_basic()?;
        self.authorize(&msg.authority, "AddAddresses")?;
        self.service.write().add_addresses(&msg.zone, &msg.addresses)
    }

    pub fn remove_addresses(&self, msg: &RemoveAddressesRequest) -> Result<(), ExemptionError> {
        msg.validate_basic()?;
        self.authorize(&msg.authority, "RemoveAddresses")?;
        self.service.write().remove_addresses(&msg.zone, &msg.addresses)
    }

    fn authorize(&self, signer: &str, message_type: &str) -> Result<(), ExemptionError> {
        if let Err(e) = self.verifier.verify(signer) {
            warn!(signer, message_type, "[qc-18] Rejected unauthorized command");
            return Err(e);
        }
        debug!(signer, message_type, "[qc-18] Command authorized");
        Ok(())
    }
}
