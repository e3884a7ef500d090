//! Inbound Ports (Driving Ports)
//!
//! The API callers use to manage zones and ask for exemption verdicts.

use crate::domain::{
    ExemptionDecision, GenesisState, Page, PageRequest, TransferParty, Zone,
};
use crate::error::ExemptionError;

/// Primary tax exemption API (Driving Port)
///
/// Mutations take `&mut self`: one writer at a time, each call fully
/// applied or not at all.
pub trait TaxExemptionApi {
    /// Create or overwrite a zone.
    fn add_zone(&mut self, zone: Zone) -> Result<(), ExemptionError>;

    /// Update an existing zone's flags.
    fn modify_zone(&mut self, zone: Zone) -> Result<(), ExemptionError>;

    /// Remove a zone and every membership pointing at it.
    fn remove_zone(&mut self, name: &str) -> Result<(), ExemptionError>;

    /// Look up a zone by name.
    fn get_zone(&self, name: &str) -> Result<Zone, ExemptionError>;

    /// Associate an address with a zone.
    fn add_address(&mut self, zone_name: &str, address: &str) -> Result<(), ExemptionError>;

    /// Dissociate an address from the zone it belongs to.
    fn remove_address(&mut self, zone_name: &str, address: &str) -> Result<(), ExemptionError>;

    /// Decide whether a transfer is exempt from the levy. Never fails.
    fn evaluate(&self, sender: TransferParty<'_>, recipient: TransferParty<'_>) -> ExemptionDecision;

    /// `true` when the transfer is exempt.
    fn is_exempt(&self, sender: TransferParty<'_>, recipient: TransferParty<'_>) -> bool {
        self.evaluate(sender, recipient).exempt
    }

    /// `true` when the levy applies.
    fn taxable(&self, sender: TransferParty<'_>, recipient: TransferParty<'_>) -> bool {
        !self.is_exempt(sender, recipient)
    }

    /// Page through zones in name order.
    fn list_zones(&self, request: &PageRequest) -> Result<Page<Zone>, ExemptionError>;

    /// Page through member addresses, optionally of one zone only.
    fn list_addresses(
        &self,
        zone_filter: &str,
        request: &PageRequest,
    ) -> Result<Page<String>, ExemptionError>;

    /// Load a snapshot.
    fn import_genesis(&mut self, genesis: &GenesisState) -> Result<(), ExemptionError>;

    /// Produce a snapshot of the full state.
    fn export_genesis(&self) -> Result<GenesisState, ExemptionError>;
}

/// Decides whether a signer may run mutating commands.
pub trait AuthorityVerifier: Send + Sync {
    /// Fails with [`ExemptionError::Unauthorized`] for any other signer.
    fn verify(&self, signer: &str) -> Result<(), ExemptionError>;
}

/// Accepts exactly one configured authority.
#[derive(Debug, Clone)]
pub struct FixedAuthority {
    authority: String,
}

impl FixedAuthority {
    pub fn new(authority: impl Into<String>) -> Self {
        Self {
            authority: authority.into(),
        }
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }
}

impl AuthorityVerifier for FixedAuthority {
    fn verify(&self, signer: &str) -> Result<(), ExemptionError> {
        if signer != self.authority {
            return Err(ExemptionError::Unauthorized {
                expected: self.authority.clone(),
                actual: signer.to_string(),
            });
        }
        Ok(())
    }
}
