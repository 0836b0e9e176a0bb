//! Operations the drawers and tables invoke, written as free functions over
//! the injected stores.

use thiserror::Error;

use crate::store::StoreError;

pub mod leads;
pub mod opportunities;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Form validation failed; the submission is blocked and nothing was
    /// mutated.
    #[error("Form error: {0}")]
    Form(String),

    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ServiceError::NotFound,
            other => ServiceError::Store(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
