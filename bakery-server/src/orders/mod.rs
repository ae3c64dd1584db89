//! Order lifecycle
//!
//! # Module Structure
//!
//! - [`money`]: pricing in `Decimal`
//! - [`transitions`]: worker transition table
//! - [`actions`]: one handler per lifecycle event
//! - [`manager`]: placement, queries and atomic action execution

pub mod actions;
pub mod manager;
pub mod money;
pub mod traits;
pub mod transitions;

pub use manager::OrdersManager;
pub use traits::{ActionHandler, OrderError};
