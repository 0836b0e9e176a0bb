//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

fn default_fetch_delay_ms() -> u64 {
    // The artificial latency the original applied before reading seed data.
    1500
}

#[derive(Clone, Debug, Deserialize)]
/// Settings the console is assembled from.
pub struct AppConfig {
    /// Path of the key/value storage file.
    pub storage_path: PathBuf,
    /// Path of the static JSON file seeding the lead collection.
    pub leads_path: PathBuf,
    /// Simulated latency applied before the seed fetch, in milliseconds.
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,
}

impl AppConfig {
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }
}
