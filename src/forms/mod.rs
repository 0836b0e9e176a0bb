//! Form definitions backing the console's drawers.

use thiserror::Error;
use validator::ValidationErrors;

pub mod lead;
pub mod opportunity;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid lead id")]
    InvalidLeadId,

    #[error("invalid opportunity id")]
    InvalidOpportunityId,
}
