//! Database Module
//!
//! - [`store`]: redb collection store (the persistence shim)
//! - [`seed`]: default catalog for a fresh database
//! - [`repository`]: typed repositories over the store

pub mod repository;
pub mod seed;
pub mod store;

pub use store::{Collection, CollectionStore, StoreError, StoreResult};
