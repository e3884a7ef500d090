//! # Integration Test Flows
//!
//! Drives qc-18 the way a node does: authority-gated commands through the
//! command handler, reads through the query handler, then a genesis export
//! replayed into a fresh store.
//!
//! ## Flows Tested:
//!
//! 1. **Commands → Queries**: zone and membership changes are visible to
//!    decisions and listings
//! 2. **Export → Import**: a snapshot reproduces the same decisions elsewhere
//! 3. **Rejected commands**: a failing message leaves no partial state

#[cfg(test)]
mod tests {
    use qc_18_tax_exemption::events::{
        AddAddressesRequest, AddZoneRequest, AddressesRequest, ModifyZoneRequest,
        RemoveAddressesRequest, RemoveZoneRequest, TaxableRequest, ZonesRequest,
    };
    use qc_18_tax_exemption::{
        shared, ErrorKind, GenesisState, InMemoryKVStore, PageRequest, SharedService,
        TaxExemptionCommandHandler, TaxExemptionQueryHandler, TaxExemptionService, TransferParty,
    };

    use crate::fixtures::addr;

    const GOV: &str = "gov";

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Node {
        service: SharedService<InMemoryKVStore>,
        commands: TaxExemptionCommandHandler<InMemoryKVStore>,
        queries: TaxExemptionQueryHandler<InMemoryKVStore>,
    }

    fn node() -> Node {
        let service = shared(TaxExemptionService::new(InMemoryKVStore::new()));
        Node {
            commands: TaxExemptionCommandHandler::new(service.clone()),
            queries: TaxExemptionQueryHandler::new(service.clone()),
            service,
        }
    }

    fn add_zone(zone: &str, outgoing: bool, incoming: bool, cross_zone: bool) -> AddZoneRequest {
        AddZoneRequest {
            authority: GOV.to_string(),
            zone: zone.to_string(),
            outgoing,
            incoming,
            cross_zone,
            addresses: vec![],
        }
    }

    fn taxable(node: &Node, from: &str, to: &str) -> bool {
        node.queries
            .taxable(&TaxableRequest {
                from_address: from.to_string(),
                to_address: to.to_string(),
            })
            .taxable
    }

    /// Exchange (outgoing + cross), merchant park (incoming), treasury (none).
    fn seeded() -> Node {
        let node = node();
        let mut exchange = add_zone("exchange", true, false, true);
        exchange.addresses = vec![addr(1), addr(2)];
        node.commands.add_zone(&exchange).unwrap();
        node.commands
            .add_zone(&add_zone("merchants", false, true, false))
            .unwrap();
        node.commands
            .add_zone(&add_zone("treasury", false, false, false))
            .unwrap();
        node.commands
            .add_addresses(&AddAddressesRequest {
                authority: GOV.to_string(),
                zone: "merchants".to_string(),
                addresses: vec![addr(3), addr(4)],
            })
            .unwrap();
        node.commands
            .add_addresses(&AddAddressesRequest {
                authority: GOV.to_string(),
                zone: "treasury".to_string(),
                addresses: vec![addr(5)],
            })
            .unwrap();
        node
    }

    // =============================================================================
    // COMMANDS → QUERIES
    // =============================================================================

    #[test]
    fn test_decisions_follow_commands() {
        let node = seeded();
        let outsider = addr(9);

        // Same zone
        assert!(!taxable(&node, &addr(1), &addr(2)));
        assert!(!taxable(&node, &addr(5), &addr(5)));
        // Sender-only: exchange exempts outgoing
        assert!(!taxable(&node, &addr(1), &outsider));
        // Recipient-only: merchants exempt incoming
        assert!(!taxable(&node, &outsider, &addr(3)));
        // Cross zone: exchange outgoing+cross applies
        assert!(!taxable(&node, &addr(1), &addr(5)));
        // Cross zone: merchants incoming without cross does not
        assert!(taxable(&node, &addr(5), &addr(3)));
        // Nobody zoned
        assert!(taxable(&node, &outsider, &addr(8)));
        assert!(taxable(&node, "", ""));

        node.commands
            .modify_zone(&ModifyZoneRequest {
                authority: GOV.to_string(),
                zone: "merchants".to_string(),
                outgoing: false,
                incoming: true,
                cross_zone: true,
            })
            .unwrap();
        assert!(!taxable(&node, &addr(5), &addr(3)));
    }

    #[test]
    fn test_listings_follow_commands() {
        let node = seeded();

        let zones = node.queries.zones(&ZonesRequest::default()).unwrap();
        let names: Vec<&str> = zones.zones.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, vec!["exchange", "merchants", "treasury"]);

        let merchants = node
            .queries
            .addresses(&AddressesRequest {
                zone_name: "merchants".to_string(),
                pagination: Some(PageRequest::with_offset(0, 0).counting_total()),
            })
            .unwrap();
        assert_eq!(merchants.addresses, vec![addr(3), addr(4)]);
        assert_eq!(merchants.pagination.total, Some(2));

        node.commands
            .remove_addresses(&RemoveAddressesRequest {
                authority: GOV.to_string(),
                zone: "merchants".to_string(),
                addresses: vec![addr(3)],
            })
            .unwrap();
        node.commands
            .remove_zone(&RemoveZoneRequest {
                authority: GOV.to_string(),
                zone: "exchange".to_string(),
            })
            .unwrap();

        let all = node.queries.addresses(&AddressesRequest::default()).unwrap();
        assert_eq!(all.addresses, vec![addr(4), addr(5)]);
        assert!(taxable(&node, &addr(1), &addr(9)));
    }

    #[test]
    fn test_paging_through_addresses_with_continuation_keys() {
        let node = seeded();
        let mut seen = Vec::new();
        let mut request = PageRequest::with_offset(0, 2);

        loop {
            let page = node
                .queries
                .addresses(&AddressesRequest {
                    zone_name: String::new(),
                    pagination: Some(request.clone()),
                })
                .unwrap();
            seen.extend(page.addresses);
            match page.pagination.next_key {
                Some(key) => request = PageRequest::after(key, 2),
                None => break,
            }
        }

        assert_eq!(seen, (1..=5).map(addr).collect::<Vec<_>>());
    }

    // =============================================================================
    // EXPORT → IMPORT
    // =============================================================================

    #[test]
    fn test_genesis_roundtrip_into_fresh_store() {
        let source = seeded();
        let genesis = source.service.read().export_genesis().unwrap();
        assert_eq!(genesis.zone_list.len(), 3);
        assert_eq!(genesis.address_count(), 5);

        // Through JSON, as the node writes it to disk
        let json = serde_json::to_string(&genesis).unwrap();
        let decoded: GenesisState = serde_json::from_str(&json).unwrap();
        decoded.validate().unwrap();

        let target = node();
        target.service.write().import_genesis(&decoded).unwrap();
        assert_eq!(target.service.read().export_genesis().unwrap(), genesis);

        let pairs = [(1, 2), (1, 9), (9, 3), (1, 5), (5, 3), (9, 8)];
        for (from, to) in pairs {
            assert_eq!(
                taxable(&source, &addr(from), &addr(to)),
                taxable(&target, &addr(from), &addr(to)),
                "decision diverged for {} -> {}",
                from,
                to
            );
        }
    }

    #[test]
    fn test_batch_decisions_match_single_decisions() {
        let node = seeded();
        let addresses: Vec<String> = (1..=9).map(addr).collect();
        let transfers: Vec<(TransferParty<'_>, TransferParty<'_>)> = addresses
            .iter()
            .flat_map(|from| {
                addresses.iter().map(move |to| {
                    (TransferParty::Address(from.as_str()), TransferParty::Address(to.as_str()))
                })
            })
            .collect();

        let service = node.service.read();
        let batch = service.evaluate_batch(&transfers);
        for ((from, to), decision) in transfers.iter().zip(&batch) {
            assert_eq!(*decision, service.evaluate(*from, *to));
        }
    }

    // =============================================================================
    // REJECTED COMMANDS
    // =============================================================================

    #[test]
    fn test_rejected_commands_leave_no_trace() {
        let node = seeded();
        let before = node.service.read().export_genesis().unwrap();

        // Wrong signer
        let mut forged = add_zone("forged", true, true, true);
        forged.authority = "mallory".to_string();
        let err = node.commands.add_zone(&forged).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);

        // One member already elsewhere aborts the whole zone creation
        let mut clash = add_zone("clash", true, false, false);
        clash.addresses = vec![addr(7), addr(3)];
        let err = node.commands.add_zone(&clash).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyAssociated);

        // One malformed address aborts the batch
        let err = node
            .commands
            .add_addresses(&AddAddressesRequest {
                authority: GOV.to_string(),
                zone: "treasury".to_string(),
                addresses: vec![addr(6), "0xnothex".to_string()],
            })
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        // Modify is update-only
        let err = node
            .commands
            .modify_zone(&ModifyZoneRequest {
                authority: GOV.to_string(),
                zone: "ghost".to_string(),
                outgoing: true,
                incoming: true,
                cross_zone: true,
            })
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        assert_eq!(node.service.read().export_genesis().unwrap(), before);
    }
}
