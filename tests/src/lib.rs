//! # Quantum-Chain Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Performance tests per subsystem
//! │   └── qc_18_tax_exemption.rs
//! │
//! ├── fixtures.rs       # Address and registry builders
//! │
//! └── integration/      # Cross-layer flows
//!     ├── flows.rs        # commands → queries → genesis round-trip
//!     ├── persistence.rs  # file-backed store and node container reopen
//!     └── concurrency.rs  # shared service under parallel readers
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qc-tests
//!
//! # By category
//! cargo test -p qc-tests integration::
//!
//! # Benchmarks
//! cargo bench -p qc-tests
//! ```

pub mod benchmarks;
pub mod fixtures;
pub mod integration;
