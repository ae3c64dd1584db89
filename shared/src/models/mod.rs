//! Data models
//!
//! Shared between bakery-server and its clients (via API).
//! Catalog IDs are `i64`; order IDs are prefixed strings (`ORD...`).
//! Field names are camelCase on the wire.

pub mod addon;
pub mod cake;
pub mod category;
pub mod order;

// Re-exports
pub use addon::*;
pub use cake::*;
pub use category::*;
pub use order::*;

pub(crate) fn default_true() -> bool {
    true
}
