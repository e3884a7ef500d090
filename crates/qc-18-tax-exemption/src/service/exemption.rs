//! Exemption decisions over resolved memberships.

use tracing::{debug, warn};

use super::TaxExemptionService;
use crate::domain::{decide, ExemptionDecision, TransferParty, ZoneCache, ZoneMembership};
use crate::ports::outbound::KeyValueStore;

impl<S: KeyValueStore> TaxExemptionService<S> {
    /// Decide one transfer. Never fails.
    pub fn evaluate(
        &self,
        sender: TransferParty<'_>,
        recipient: TransferParty<'_>,
    ) -> ExemptionDecision {
        let mut cache = ZoneCache::new();
        self.evaluate_cached(sender, recipient, &mut cache)
    }

    /// `true` when the transfer is exempt from the levy.
    pub fn is_exempt(&self, sender: TransferParty<'_>, recipient: TransferParty<'_>) -> bool {
        self.evaluate(sender, recipient).exempt
    }

    /// `true` when the levy applies.
    pub fn taxable(&self, sender: TransferParty<'_>, recipient: TransferParty<'_>) -> bool {
        !self.is_exempt(sender, recipient)
    }

    /// Decide many transfers sharing one zone cache.
    pub fn evaluate_batch(
        &self,
        transfers: &[(TransferParty<'_>, TransferParty<'_>)],
    ) -> Vec<ExemptionDecision> {
        let mut cache = ZoneCache::new();
        transfers
            .iter()
            .map(|(sender, recipient)| self.evaluate_cached(*sender, *recipient, &mut cache))
            .collect()
    }

    fn evaluate_cached(
        &self,
        sender: TransferParty<'_>,
        recipient: TransferParty<'_>,
        cache: &mut ZoneCache,
    ) -> ExemptionDecision {
        let from = self.resolve(sender, cache);
        let to = self.resolve(recipient, cache);
        let decision = decide(&from, &to);

        debug!(
            ?sender,
            ?recipient,
            rule = ?decision.rule,
            exempt = decision.exempt,
            "[qc-18] Exemption decided"
        );
        decision
    }

    /// Store failures resolve to `Absent`, so the levy applies.
    fn resolve(&self, party: TransferParty<'_>, cache: &mut ZoneCache) -> ZoneMembership {
        let TransferParty::Address(address) = party else {
            return ZoneMembership::Absent;
        };
        self.check_and_cache_zone(address, cache)
            .unwrap_or_else(|e| {
                warn!(address, error = %e, "[qc-18] Zone lookup failed; treating as absent");
                ZoneMembership::Absent
            })
    }
}
