//! Command and query handlers over a shared service.

mod command_handler;
mod query_handler;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::service::TaxExemptionService;

pub use command_handler::TaxExemptionCommandHandler;
pub use query_handler::TaxExemptionQueryHandler;

/// Service shared between handlers: one writer, many readers.
pub type SharedService<S> = Arc<RwLock<TaxExemptionService<S>>>;

/// Wrap a service for sharing between handlers.
pub fn shared<S: crate::ports::KeyValueStore>(service: TaxExemptionService<S>) -> SharedService<S> {
    Arc::new(RwLock::new(service))
}
