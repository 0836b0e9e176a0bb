//! The lead collection: fetched once at startup, searched in memory,
//! mutated only by full-record replacement.
use crate::domain::lead::Lead;
use crate::domain::types::LeadId;
use crate::filters;
use crate::seed::LeadSource;
use crate::store::config::ConfigStore;
use crate::store::errors::{StoreError, StoreResult};

#[derive(Default)]
pub struct LeadsStore {
    leads: Vec<Lead>,
    search: String,
    selected: Option<LeadId>,
    last_error: Option<String>,
    loaded: bool,
}

impl LeadsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the one-time seed fetch. On failure the collection stays empty
    /// and the fixed error message is kept for the view to display.
    pub fn load(&mut self, source: &dyn LeadSource) {
        match source.fetch() {
            Ok(leads) => {
                self.leads = leads;
                self.last_error = None;
            }
            Err(err) => {
                log::error!("Seed fetch failed: {err}");
                self.leads = Vec::new();
                self.last_error = Some(err.to_string());
            }
        }
        self.loaded = true;
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Commits a (debounced) search string. Not persisted; the lead search
    /// starts blank each session.
    pub fn set_search<S: Into<String>>(&mut self, search: S) {
        self.search = search.into();
    }

    pub fn get(&self, id: &LeadId) -> Option<&Lead> {
        self.leads.iter().find(|lead| &lead.id == id)
    }

    /// Marks a lead as selected (the open drawer).
    pub fn select(&mut self, id: &LeadId) -> StoreResult<()> {
        if self.get(id).is_none() {
            return Err(StoreError::NotFound);
        }
        self.selected = Some(id.clone());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The currently selected lead, read through the collection so it always
    /// reflects the latest record.
    pub fn selected(&self) -> Option<&Lead> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// Replaces the full record with the same id. The selection needs no
    /// refresh: it is an id, dereferenced on read.
    pub fn update(&mut self, lead: Lead) -> StoreResult<Lead> {
        let slot = self
            .leads
            .iter_mut()
            .find(|existing| existing.id == lead.id)
            .ok_or(StoreError::NotFound)?;
        *slot = lead;
        Ok(slot.clone())
    }

    /// The derived list for the table view: search composed with the config
    /// store's status filter and score sort.
    pub fn filtered(&self, config: &ConfigStore) -> Vec<Lead> {
        filters::filter_leads(&self.leads, &config.lead_filters(&self.search))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::lead::LeadStatus;
    use crate::filters::ScoreSort;
    use crate::seed::FetchError;
    use crate::storage::MemoryStore;
    use crate::storage::mock::MockSeed;

    struct FixedSource(Vec<Lead>);

    impl LeadSource for FixedSource {
        fn fetch(&self) -> Result<Vec<Lead>, FetchError> {
            Ok(self.0.clone())
        }
    }

    fn lead(id: &str, name: &str, score: i32) -> Lead {
        Lead {
            id: LeadId::new(id).unwrap(),
            name: name.to_string(),
            company: format!("{name} Co"),
            email: format!("{}@example.test", name.to_lowercase()),
            source: "referral".to_string(),
            score,
            status: LeadStatus::New,
        }
    }

    #[test]
    fn test_load_populates_collection() {
        let mut store = LeadsStore::new();
        store.load(&FixedSource(vec![lead("l1", "Alice", 70)]));
        assert!(store.is_loaded());
        assert_eq!(store.leads().len(), 1);
        assert_eq!(store.error(), None);
    }

    #[test]
    fn test_failed_load_keeps_collection_empty_with_message() {
        let mut source = MockSeed::new();
        source
            .expect_fetch()
            .returning(|| Err(FetchError::Unavailable(std::io::Error::other("boom"))));

        let mut store = LeadsStore::new();
        store.load(&source);
        assert!(store.is_loaded());
        assert!(store.leads().is_empty());
        assert_eq!(store.error(), Some("Failed to fetch leads"));
    }

    #[test]
    fn test_update_replaces_record_and_selection_follows() {
        let mut store = LeadsStore::new();
        store.load(&FixedSource(vec![lead("l1", "Alice", 70), lead("l2", "Bob", 80)]));
        let id = LeadId::new("l1").unwrap();
        store.select(&id).unwrap();

        let mut replacement = lead("l1", "Alice", 70);
        replacement.email = "new@example.test".to_string();
        replacement.status = LeadStatus::Contacted;
        store.update(replacement.clone()).unwrap();

        assert_eq!(store.get(&id), Some(&replacement));
        assert_eq!(store.selected(), Some(&replacement));
    }

    #[test]
    fn test_update_unknown_lead_is_not_found() {
        let mut store = LeadsStore::new();
        store.load(&FixedSource(vec![lead("l1", "Alice", 70)]));
        let err = store.update(lead("ghost", "Ghost", 1)).unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[test]
    fn test_select_unknown_lead_is_not_found() {
        let mut store = LeadsStore::new();
        let err = store.select(&LeadId::new("nope").unwrap()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[test]
    fn test_filtered_composes_search_with_config() {
        let mut store = LeadsStore::new();
        store.load(&FixedSource(vec![
            lead("l1", "Alice", 70),
            lead("l2", "Bob", 90),
            lead("l3", "Alan", 50),
        ]));
        store.set_search("al");

        let mut config = ConfigStore::new(Arc::new(MemoryStore::new()));
        config.set_score_sort(ScoreSort::Desc).unwrap();

        let derived = store.filtered(&config);
        let ids: Vec<&str> = derived.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["l1", "l3"]);
    }
}
