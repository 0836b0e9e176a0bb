//! The three application stores of the console.
//!
//! Explicit, injectable state holders (no globals): constructed at app
//! start with a shared storage handle, hydrated from their persisted keys,
//! torn down by drop.

pub mod config;
pub mod errors;
pub mod leads;
pub mod opportunities;

pub use config::ConfigStore;
pub use errors::{StoreError, StoreResult};
pub use leads::LeadsStore;
pub use opportunities::OpportunitiesStore;
