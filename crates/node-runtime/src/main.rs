//! `node-runtime` binary entry point.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use node_runtime::cli::Cli;
use node_runtime::{load_config, NodeContainer, NodeRuntime};
use qc_18_tax_exemption::events::ErrorResponse;
use qc_18_tax_exemption::ExemptionError;

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.overrides()).context("Invalid configuration")?;
    quantum_telemetry::init_telemetry(&config.telemetry)?;

    let signer = cli
        .signer
        .clone()
        .unwrap_or_else(|| config.exemption.authority.clone());
    let container = NodeContainer::open(&config)?;

    let mut runtime = NodeRuntime::new(container, signer, io::stdout().lock());
    runtime.execute(cli.command)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(err) = e.downcast_ref::<ExemptionError>() {
                if let Ok(body) = serde_json::to_string_pretty(&ErrorResponse::from(err)) {
                    println!("{}", body);
                }
            }
            error!(error = %format!("{:#}", e), "Command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
