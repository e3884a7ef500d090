//! # Shared Types Crate
//!
//! Account identity shared by every crate in the workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the address format is defined once, here.
//! - **Canonical Form**: parsed addresses always render as lowercase
//!   `0x`-prefixed hex, so equal accounts always produce equal strings.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
