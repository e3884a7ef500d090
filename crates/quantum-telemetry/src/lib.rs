//! # Quantum Telemetry
//!
//! Structured logging bootstrap for Quantum-Chain binaries.
//!
//! Libraries only emit `tracing` events; binaries call [`init_telemetry`]
//! once at startup to decide where those events go.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quantum_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::for_service("node-runtime"))?;
//!     // Your application code here
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `quantum-chain` | Service name in logs |
//! | `QC_LOG_LEVEL` | `info` | Log level filter |
//! | `QC_CONSOLE_OUTPUT` | `true` | Write logs to stderr |
//! | `QC_JSON_LOGS` | `false` (`true` in containers) | JSON log lines |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::init_tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize process-wide logging.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    init_tracing(config)?;
    tracing::info!(service = %config.service_name, "Telemetry initialized");
    Ok(())
}
