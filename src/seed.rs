//! Seed-data loading: the one external read the console performs.
//!
//! The lead collection is fetched exactly once at startup from a static JSON
//! array. The source sits behind a trait so tests can substitute failures or
//! fixed fixtures.
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::domain::lead::Lead;

/// Errors raised while fetching the seed file.
///
/// Both variants display the same fixed message the list view shows in place
/// of the table; the underlying cause is preserved as the error source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch leads")]
    Unavailable(#[from] std::io::Error),
    #[error("Failed to fetch leads")]
    Malformed(#[from] serde_json::Error),
}

/// Where the lead collection comes from.
pub trait LeadSource {
    fn fetch(&self) -> Result<Vec<Lead>, FetchError>;
}

/// Reads a JSON array of leads from disk after a fixed artificial delay.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    path: PathBuf,
    delay: Duration,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delay: Duration::ZERO,
        }
    }

    /// Simulated network latency applied before every fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl LeadSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<Lead>, FetchError> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let leads = serde_json::from_str(&raw)?;
        Ok(leads)
    }
}
