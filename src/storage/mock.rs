//! Mock implementations of the storage seams for isolating stores and
//! services in tests.
use mockall::mock;

use crate::domain::lead::Lead;
use crate::seed::{FetchError, LeadSource};
use crate::storage::{KeyValueStore, StorageResult};

mock! {
    pub Storage {}

    impl KeyValueStore for Storage {
        fn get(&self, key: &str) -> StorageResult<Option<String>>;
        fn set(&self, key: &str, value: &str) -> StorageResult<()>;
        fn remove(&self, key: &str) -> StorageResult<()>;
    }
}

mock! {
    pub Seed {}

    impl LeadSource for Seed {
        fn fetch(&self) -> Result<Vec<Lead>, FetchError>;
    }
}
