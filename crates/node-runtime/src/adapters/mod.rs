//! Port implementations hosted by the node.

pub mod storage;
pub mod store;

pub use store::NodeStore;
