//! Executes one CLI command against an opened container.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};

use qc_18_tax_exemption::events::{
    AddAddressesRequest, AddZoneRequest, AddressesRequest, ModifyZoneRequest,
    RemoveAddressesRequest, RemoveZoneRequest, TaxableRequest, ZoneRequest, ZonesRequest,
};
use qc_18_tax_exemption::{ExemptionError, GenesisState};

use crate::cli::{
    transfer_side, AddressCommand, Command, GenesisCommand, QueryCommand, ZoneArgs, ZoneCommand,
};
use crate::container::NodeContainer;

/// Runs commands, writing JSON results to `out`.
pub struct NodeRuntime<W: Write> {
    container: NodeContainer,
    signer: String,
    out: W,
}

impl<W: Write> NodeRuntime<W> {
    pub fn new(container: NodeContainer, signer: impl Into<String>, out: W) -> Self {
        Self {
            container,
            signer: signer.into(),
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Genesis { action } => self.genesis(action),
            Command::Zone { action } => self.zone(action),
            Command::Address { action } => self.address(action),
            Command::Query { action } => self.query(action),
            Command::Migrate { zone, from } => self.migrate(&zone, &from),
        }
    }

    fn genesis(&mut self, action: GenesisCommand) -> Result<()> {
        match action {
            GenesisCommand::Validate { file } => {
                let genesis = read_genesis(&file)?;
                genesis.validate()?;
                self.emit(&json!({
                    "valid": true,
                    "zones": genesis.zone_list.len(),
                    "addresses": genesis.address_count(),
                }))
            }
            GenesisCommand::Import { file } => {
                let genesis = read_genesis(&file)?;
                genesis.validate()?;
                self.container.service.write().import_genesis(&genesis)?;
                self.emit(&json!({
                    "imported": true,
                    "zones": genesis.zone_list.len(),
                    "addresses": genesis.address_count(),
                }))
            }
            GenesisCommand::Export { output } => {
                let genesis = match self.container.service.read().export_genesis() {
                    Ok(genesis) => genesis,
                    Err(e @ ExemptionError::StateCorrupted(_)) => {
                        error!(error = %e, "[qc-18] Refusing to export corrupted state");
                        return Err(e.into());
                    }
                    Err(e) => return Err(e.into()),
                };

                match output {
                    Some(path) => {
                        let bytes = serde_json::to_vec_pretty(&genesis)?;
                        fs::write(&path, bytes)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                        info!(path = %path.display(), "Genesis written");
                        self.emit(&json!({
                            "exported": true,
                            "zones": genesis.zone_list.len(),
                            "addresses": genesis.address_count(),
                        }))
                    }
                    None => self.emit(&genesis),
                }
            }
        }
    }

    fn zone(&mut self, action: ZoneCommand) -> Result<()> {
        match action {
            ZoneCommand::Add { zone, addresses } => {
                let request = AddZoneRequest {
                    authority: self.signer.clone(),
                    zone: zone.name,
                    outgoing: zone.outgoing,
                    incoming: zone.incoming,
                    cross_zone: zone.cross_zone,
                    addresses,
                };
                self.container.commands.add_zone(&request)?;
                self.show_zone(&request.zone)
            }
            ZoneCommand::Modify { zone } => {
                let ZoneArgs {
                    name,
                    outgoing,
                    incoming,
                    cross_zone,
                } = zone;
                let request = ModifyZoneRequest {
                    authority: self.signer.clone(),
                    zone: name,
                    outgoing,
                    incoming,
                    cross_zone,
                };
                self.container.commands.modify_zone(&request)?;
                self.show_zone(&request.zone)
            }
            ZoneCommand::Remove { name } => {
                self.container.commands.remove_zone(&RemoveZoneRequest {
                    authority: self.signer.clone(),
                    zone: name.clone(),
                })?;
                self.emit(&json!({ "removed": name }))
            }
            ZoneCommand::Get { name } => self.show_zone(&name),
        }
    }

    fn address(&mut self, action: AddressCommand) -> Result<()> {
        match action {
            AddressCommand::Add { zone, addresses } => {
                let count = addresses.len();
                self.container.commands.add_addresses(&AddAddressesRequest {
                    authority: self.signer.clone(),
                    zone: zone.clone(),
                    addresses,
                })?;
                self.emit(&json!({ "zone": zone, "added": count }))
            }
            AddressCommand::Remove { zone, addresses } => {
                let count = addresses.len();
                self.container
                    .commands
                    .remove_addresses(&RemoveAddressesRequest {
                        authority: self.signer.clone(),
                        zone: zone.clone(),
                        addresses,
                    })?;
                self.emit(&json!({ "zone": zone, "removed": count }))
            }
        }
    }

    fn query(&mut self, action: QueryCommand) -> Result<()> {
        match action {
            QueryCommand::Taxable { from, to } => {
                let response = self.container.queries.taxable(&TaxableRequest {
                    from_address: transfer_side(&from).to_string(),
                    to_address: transfer_side(&to).to_string(),
                });
                self.emit(&response)
            }
            QueryCommand::Zones { page } => {
                let pagination = page.to_request().context("Invalid --page-key")?;
                let response = self.container.queries.zones(&ZonesRequest {
                    pagination: Some(pagination),
                })?;
                self.emit(&response)
            }
            QueryCommand::Addresses { zone, page } => {
                let pagination = page.to_request().context("Invalid --page-key")?;
                let response = self.container.queries.addresses(&AddressesRequest {
                    zone_name: zone.unwrap_or_default(),
                    pagination: Some(pagination),
                })?;
                self.emit(&response)
            }
        }
    }

    fn migrate(&mut self, zone: &str, from: &Path) -> Result<()> {
        let contents = fs::read_to_string(from)
            .with_context(|| format!("Failed to read {}", from.display()))?;
        let legacy = parse_address_list(&contents);

        let migrated = self
            .container
            .service
            .write()
            .migrate_flat_exemption_list(zone, &legacy)?;
        self.emit(&json!({ "zone": zone, "migrated": migrated }))
    }

    fn show_zone(&mut self, name: &str) -> Result<()> {
        let response = self.container.queries.zone(&ZoneRequest {
            zone_name: name.to_string(),
        })?;
        self.emit(&response)
    }

    fn emit<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }
}

fn read_genesis(path: &Path) -> Result<GenesisState> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("Malformed genesis file {}", path.display()))
}

/// One address per line; blank lines and `#` comments are skipped.
pub fn parse_address_list(contents: &str) -> Vec<&str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
