//! Cross-layer integration flows.

pub mod concurrency;
pub mod flows;
pub mod persistence;
