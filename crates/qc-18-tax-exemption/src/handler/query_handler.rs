//! Query Handler
//!
//! Read-only: holds the shared read lock for the duration of one query.

use super::SharedService;
use crate::domain::TransferParty;
use crate::error::ExemptionError;
use crate::events::{
    AddressesRequest, AddressesResponse, TaxableRequest, TaxableResponse, ZoneRequest,
    ZoneResponse, ZonesRequest, ZonesResponse,
};
use crate::ports::KeyValueStore;

/// Handler for read-only queries.
pub struct TaxExemptionQueryHandler<S: KeyValueStore> {
    service: SharedService<S>,
}

impl<S: KeyValueStore> TaxExemptionQueryHandler<S> {
    pub fn new(service: SharedService<S>) -> Self {
        Self { service }
    }

    pub fn taxable(&self, req: &TaxableRequest) -> TaxableResponse {
        let taxable = self.service.read().taxable(
            TransferParty::from_optional(&req.from_address),
            TransferParty::from_optional(&req.to_address),
        );
        TaxableResponse { taxable }
    }

    pub fn zone(&self, req: &ZoneRequest) -> Result<ZoneResponse, ExemptionError> {
        let zone = self.service.read().get_zone(&req.zone_name)?;
        Ok(ZoneResponse { zone })
    }

    pub fn zones(&self, req: &ZonesRequest) -> Result<ZonesResponse, ExemptionError> {
        let page = self
            .service
            .read()
            .list_zones(&req.pagination.clone().unwrap_or_default())?;
        Ok(ZonesResponse {
            zones: page.items,
            pagination: page.pagination,
        })
    }

    pub fn addresses(&self, req: &AddressesRequest) -> Result<AddressesResponse, ExemptionError> {
        let page = self
            .service
            .read()
            .list_addresses(&req.zone_name, &req.pagination.clone().unwrap_or_default())?;
        Ok(AddressesResponse {
            addresses: page.items,
            pagination: page.pagination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryKVStore;
    use crate::domain::{PageRequest, Zone};
    use crate::error::ErrorKind;
    use crate::handler::shared;
    use crate::service::test_support::addr;
    use crate::service::TaxExemptionService;

    fn handler() -> TaxExemptionQueryHandler<InMemoryKVStore> {
        let mut service = TaxExemptionService::new(InMemoryKVStore::new());
        service.add_zone(Zone::new("zone1").with_outgoing(true)).unwrap();
        service.add_zone(Zone::new("zone2")).unwrap();
        service.add_addresses("zone1", &[addr(1), addr(2)]).unwrap();
        service.add_address("zone2", &addr(3)).unwrap();
        TaxExemptionQueryHandler::new(shared(service))
    }

    fn taxable(handler: &TaxExemptionQueryHandler<InMemoryKVStore>, from: &str, to: &str) -> bool {
        handler
            .taxable(&TaxableRequest {
                from_address: from.to_string(),
                to_address: to.to_string(),
            })
            .taxable
    }

    #[test]
    fn test_taxable_query() {
        let handler = handler();
        assert!(!taxable(&handler, &addr(1), &addr(2)));
        assert!(!taxable(&handler, &addr(1), ""));
        assert!(taxable(&handler, &addr(3), ""));
        assert!(taxable(&handler, &addr(1), &addr(3)));
        assert!(taxable(&handler, "", ""));
    }

    #[test]
    fn test_zone_query() {
        let handler = handler();
        let response = handler
            .zone(&ZoneRequest {
                zone_name: "zone1".into(),
            })
            .unwrap();
        assert!(response.zone.outgoing);

        let err = handler
            .zone(&ZoneRequest {
                zone_name: "zone9".into(),
            })
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_zones_query_paginates() {
        let handler = handler();
        let response = handler
            .zones(&ZonesRequest {
                pagination: Some(PageRequest::with_offset(0, 1).counting_total()),
            })
            .unwrap();
        assert_eq!(response.zones.len(), 1);
        assert_eq!(response.pagination.total, Some(2));
        assert!(response.pagination.next_key.is_some());

        let all = handler.zones(&ZonesRequest::default()).unwrap();
        assert_eq!(all.zones.len(), 2);
        assert!(all.pagination.next_key.is_none());
    }

    #[test]
    fn test_addresses_query() {
        let handler = handler();
        let response = handler
            .addresses(&AddressesRequest {
                zone_name: "zone1".into(),
                pagination: None,
            })
            .unwrap();
        assert_eq!(response.addresses, vec![addr(1), addr(2)]);

        let everyone = handler.addresses(&AddressesRequest::default()).unwrap();
        assert_eq!(everyone.addresses.len(), 3);
    }
}
