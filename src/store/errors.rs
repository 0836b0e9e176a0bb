use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Entity not found")]
    NotFound,

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
