//! Page-data structs handed from the service layer to the (out-of-scope)
//! table views.

pub mod leads;
pub mod opportunities;
