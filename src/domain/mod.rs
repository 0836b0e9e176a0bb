//! Domain aggregates exposed by the console's service layer.

pub mod lead;
pub mod opportunity;
pub mod types;
