//! # Quantum-Chain Node Runtime
//!
//! Hosts the tax exemption subsystem (qc-18) behind an operator CLI.
//!
//! ## Modular Structure
//!
//! - `config` - Layered configuration (defaults, environment, flags)
//! - `container/` - Opens storage and wires the command/query handlers
//! - `adapters/` - Storage backends (`NodeStore`, RocksDB behind a feature)
//! - `cli` - clap command definitions
//! - `runtime` - Executes one command, printing JSON
//!
//! ## Startup Sequence
//!
//! 1. Parse the command line
//! 2. Load configuration (defaults, then env, then flags)
//! 3. Initialize logging
//! 4. Open the configured store and build the handlers
//! 5. Execute the command

pub mod adapters;
pub mod cli;
pub mod config;
pub mod container;
pub mod runtime;

pub use config::{load_config, NodeConfig};
pub use container::NodeContainer;
pub use runtime::NodeRuntime;
