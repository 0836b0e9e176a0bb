//! Core of a small seller console: leads and opportunities with client-side
//! search, filtering, sorting, pagination and a lead-to-opportunity
//! conversion workflow. State persists as JSON entries in a key/value
//! storage file; the lead collection is seeded once from a static JSON
//! array.
//!
//! The visual layer (tables, drawers, selects) is out of scope; this crate
//! provides the stores, derivation functions and operations such a view
//! binds to.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::seed::JsonFileSource;
use crate::storage::{FileStore, KeyValueStore};
use crate::store::{ConfigStore, LeadsStore, OpportunitiesStore};

pub mod config;
pub mod debounce;
pub mod domain;
pub mod dto;
pub mod filters;
pub mod forms;
pub mod pagination;
pub mod seed;
pub mod services;
pub mod storage;
pub mod store;

/// The assembled application state: the three stores of the console.
pub struct App {
    pub config: ConfigStore,
    pub leads: LeadsStore,
    pub opportunities: OpportunitiesStore,
}

/// Builds the stores over a shared file-backed storage handle and runs the
/// one-time seed fetch.
///
/// A failed fetch is not fatal: the lead collection stays empty and the
/// error message is carried on the leads store for the view to show.
pub fn bootstrap(app_config: &AppConfig) -> App {
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&app_config.storage_path));

    let config = ConfigStore::new(Arc::clone(&storage));
    let opportunities = OpportunitiesStore::new(Arc::clone(&storage));

    let mut leads = LeadsStore::new();
    let source = JsonFileSource::new(&app_config.leads_path).with_delay(app_config.fetch_delay());
    leads.load(&source);

    App {
        config,
        leads,
        opportunities,
    }
}
