//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use qc_18_tax_exemption::PageRequest;

use crate::config::{ConfigOverrides, StorageBackend};

/// Quantum-Chain node: zone-based transfer levy exemption (qc-18)
#[derive(Parser, Debug)]
#[command(name = "node-runtime", version)]
#[command(about = "Operate the qc-18 tax exemption registry")]
pub struct Cli {
    /// Data directory (overrides QC_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage backend (overrides QC_STORAGE_BACKEND)
    #[arg(long, global = true, value_enum)]
    pub backend: Option<StorageBackend>,

    /// Governance identity allowed to mutate (overrides QC_TAX_AUTHORITY)
    #[arg(long, global = true)]
    pub authority: Option<String>,

    /// Identity signing mutating commands (default: the governance identity)
    #[arg(long, global = true)]
    pub signer: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            data_dir: self.data_dir.clone(),
            backend: self.backend,
            authority: self.authority.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate, import or export a genesis snapshot
    Genesis {
        #[command(subcommand)]
        action: GenesisCommand,
    },
    /// Manage zones
    Zone {
        #[command(subcommand)]
        action: ZoneCommand,
    },
    /// Manage zone membership
    Address {
        #[command(subcommand)]
        action: AddressCommand,
    },
    /// Read-only queries
    Query {
        #[command(subcommand)]
        action: QueryCommand,
    },
    /// Move a legacy flat exemption list (one address per line) into a zone
    Migrate {
        /// Zone to create for the migrated addresses
        #[arg(long)]
        zone: String,
        /// Legacy list file
        #[arg(long)]
        from: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum GenesisCommand {
    /// Check a genesis file without touching the store
    Validate { file: PathBuf },
    /// Load a genesis file into the store
    Import { file: PathBuf },
    /// Write the current state as genesis JSON
    Export {
        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

/// Zone flags shared by add and modify.
#[derive(Args, Debug, Clone)]
pub struct ZoneArgs {
    /// Zone name
    pub name: String,
    /// Exempt transfers leaving the zone
    #[arg(long)]
    pub outgoing: bool,
    /// Exempt transfers entering the zone
    #[arg(long)]
    pub incoming: bool,
    /// Let the flags above apply to transfers with other zones
    #[arg(long)]
    pub cross_zone: bool,
}

#[derive(Subcommand, Debug)]
pub enum ZoneCommand {
    /// Create or overwrite a zone
    Add {
        #[command(flatten)]
        zone: ZoneArgs,
        /// Member to associate in the same commit (repeatable)
        #[arg(long = "address")]
        addresses: Vec<String>,
    },
    /// Update the flags of an existing zone
    Modify {
        #[command(flatten)]
        zone: ZoneArgs,
    },
    /// Remove a zone and all its memberships
    Remove { name: String },
    /// Show one zone
    Get { name: String },
}

#[derive(Subcommand, Debug)]
pub enum AddressCommand {
    /// Associate addresses with a zone
    Add {
        zone: String,
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Dissociate addresses from a zone
    Remove {
        zone: String,
        #[arg(required = true)]
        addresses: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum QueryCommand {
    /// Is a transfer subject to the levy? Use `-` for an unspecified side
    Taxable { from: String, to: String },
    /// List zones
    Zones {
        #[command(flatten)]
        page: PageArgs,
    },
    /// List member addresses, optionally of one zone
    Addresses {
        zone: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
}

/// Pagination flags.
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Maximum records (0 = all)
    #[arg(long, default_value_t = 0)]
    pub limit: u64,
    /// Records to skip
    #[arg(long, default_value_t = 0)]
    pub offset: u64,
    /// Descending order
    #[arg(long)]
    pub reverse: bool,
    /// Include the total number of matching records
    #[arg(long)]
    pub count_total: bool,
    /// Continuation key (hex) from a previous page
    #[arg(long)]
    pub page_key: Option<String>,
}

impl PageArgs {
    pub fn to_request(&self) -> Result<PageRequest, hex::FromHexError> {
        let key = self.page_key.as_deref().map(hex::decode).transpose()?;
        Ok(PageRequest {
            key,
            offset: self.offset,
            limit: self.limit,
            count_total: self.count_total,
            reverse: self.reverse,
        })
    }
}

/// `-` stands for an unspecified transfer side.
pub fn transfer_side(arg: &str) -> &str {
    if arg == "-" {
        ""
    } else {
        arg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_zone_add() {
        let cli = Cli::try_parse_from([
            "node-runtime",
            "--backend",
            "memory",
            "zone",
            "add",
            "exchange",
            "--outgoing",
            "--cross-zone",
            "--address",
            "0x1111111111111111111111111111111111111111",
        ])
        .unwrap();

        assert_eq!(cli.backend, Some(StorageBackend::Memory));
        match cli.command {
            Command::Zone {
                action: ZoneCommand::Add { zone, addresses },
            } => {
                assert_eq!(zone.name, "exchange");
                assert!(zone.outgoing && zone.cross_zone && !zone.incoming);
                assert_eq!(addresses.len(), 1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_taxable_needs_two_sides() {
        assert!(Cli::try_parse_from(["node-runtime", "query", "taxable", "-"]).is_err());
        assert!(Cli::try_parse_from(["node-runtime", "query", "taxable", "-", "-"]).is_ok());
    }

    #[test]
    fn test_page_args() {
        let page = PageArgs {
            limit: 2,
            reverse: true,
            page_key: Some("7a6f6e6531".to_string()),
            ..PageArgs::default()
        };
        let request = page.to_request().unwrap();
        assert_eq!(request.key, Some(b"zone1".to_vec()));
        assert!(request.reverse);

        let bad = PageArgs {
            page_key: Some("zz".to_string()),
            ..PageArgs::default()
        };
        assert!(bad.to_request().is_err());
    }

    #[test]
    fn test_transfer_side() {
        assert_eq!(transfer_side("-"), "");
        assert_eq!(transfer_side("0xab"), "0xab");
    }
}
