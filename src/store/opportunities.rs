//! The opportunity collection: persisted as one JSON entry, grown by lead
//! conversion, edited by partial merge.
//!
//! Mutations follow a copy-persist-commit pattern: the candidate collection
//! is written to storage first and only swapped into memory when the write
//! succeeds, so a failed save leaves no partial mutation behind.
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::opportunity::{NewOpportunity, Opportunity, UpdateOpportunity};
use crate::domain::types::OpportunityId;
use crate::filters::{self, OpportunityFilters, StageFilter};
use crate::storage::{self, KeyValueStore, keys};
use crate::store::errors::{StoreError, StoreResult};

pub struct OpportunitiesStore {
    opportunities: Vec<Opportunity>,
    search: String,
    stage_filter: StageFilter,
    selected: Option<OpportunityId>,
    storage: Arc<dyn KeyValueStore>,
}

impl OpportunitiesStore {
    /// Hydrates the collection and its view state from storage. `createdAt`
    /// strings come back as timestamps via serde; corrupt entries fall back
    /// to an empty collection / defaults.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let opportunities = storage::load_json_or_default(storage.as_ref(), keys::OPPORTUNITIES);
        let search = storage::load_json_or_default(storage.as_ref(), keys::OPPORTUNITY_SEARCH);
        let stage_filter =
            storage::load_json_or_default(storage.as_ref(), keys::OPPORTUNITY_STAGE_FILTER);

        Self {
            opportunities,
            search,
            stage_filter,
            selected: None,
            storage,
        }
    }

    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn stage_filter(&self) -> StageFilter {
        self.stage_filter
    }

    pub fn get(&self, id: &OpportunityId) -> Option<&Opportunity> {
        self.opportunities.iter().find(|opp| &opp.id == id)
    }

    pub fn select(&mut self, id: &OpportunityId) -> StoreResult<()> {
        if self.get(id).is_none() {
            return Err(StoreError::NotFound);
        }
        self.selected = Some(id.clone());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Opportunity> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// Commits a (debounced) search string and persists it.
    pub fn set_search<S: Into<String>>(&mut self, search: S) -> StoreResult<()> {
        self.search = search.into();
        storage::save_json(self.storage.as_ref(), keys::OPPORTUNITY_SEARCH, &self.search)?;
        Ok(())
    }

    pub fn set_stage_filter(&mut self, filter: StageFilter) -> StoreResult<()> {
        self.stage_filter = filter;
        storage::save_json(
            self.storage.as_ref(),
            keys::OPPORTUNITY_STAGE_FILTER,
            &filter,
        )?;
        Ok(())
    }

    /// Appends the opportunity fabricated by a conversion.
    ///
    /// The identity is the time-based token for `now`, bumped by a
    /// millisecond while taken, so two conversions in the same instant still
    /// get distinct ids. Not idempotent on purpose: converting the same lead
    /// twice yields two independent records.
    pub fn insert(&mut self, new: NewOpportunity, now: DateTime<Utc>) -> StoreResult<Opportunity> {
        let id = self.next_id(now);
        let opportunity = new.into_opportunity(id, now);

        let mut next = self.opportunities.clone();
        next.push(opportunity.clone());
        self.persist(&next)?;
        self.opportunities = next;

        Ok(opportunity)
    }

    /// Merges a partial update onto the record with `id`; absent fields are
    /// preserved.
    pub fn update(
        &mut self,
        id: &OpportunityId,
        updates: &UpdateOpportunity,
    ) -> StoreResult<Opportunity> {
        let position = self
            .opportunities
            .iter()
            .position(|opp| &opp.id == id)
            .ok_or(StoreError::NotFound)?;

        let mut next = self.opportunities.clone();
        next[position].apply(updates);
        let updated = next[position].clone();
        self.persist(&next)?;
        self.opportunities = next;

        Ok(updated)
    }

    /// The derived list for the table view.
    pub fn filtered(&self) -> Vec<Opportunity> {
        filters::filter_opportunities(
            &self.opportunities,
            &OpportunityFilters {
                search: self.search.clone(),
                stage: self.stage_filter,
            },
        )
    }

    fn next_id(&self, now: DateTime<Utc>) -> OpportunityId {
        let mut millis = now.timestamp_millis();
        loop {
            let candidate = OpportunityId::from_timestamp_millis(millis);
            if self.get(&candidate).is_none() {
                return candidate;
            }
            millis += 1;
        }
    }

    fn persist(&self, opportunities: &[Opportunity]) -> StoreResult<()> {
        storage::save_json(self.storage.as_ref(), keys::OPPORTUNITIES, opportunities)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use mockall::predicate;

    use super::*;
    use crate::domain::opportunity::OpportunityStage;
    use crate::domain::types::LeadId;
    use crate::storage::MemoryStore;
    use crate::storage::mock::MockStorage;

    fn new_opportunity(lead_id: &str, name: &str) -> NewOpportunity {
        NewOpportunity {
            lead_id: LeadId::new(lead_id).unwrap(),
            name: name.to_string(),
            stage: OpportunityStage::Discovery,
            amount: Some(5000.0),
            account_name: name.to_string(),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_insert_appends_and_persists() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = OpportunitiesStore::new(Arc::clone(&storage) as Arc<dyn KeyValueStore>);

        let created = store.insert(new_opportunity("l1", "Acme Co"), fixed_now()).unwrap();
        assert_eq!(created.original_lead_id.as_str(), "l1");
        assert_eq!(created.created_at, fixed_now());
        assert_eq!(store.opportunities().len(), 1);

        let persisted = storage.get(keys::OPPORTUNITIES).unwrap().unwrap();
        assert!(persisted.contains("\"accountName\":\"Acme Co\""));
    }

    #[test]
    fn test_same_instant_inserts_get_distinct_ids() {
        let mut store = OpportunitiesStore::new(Arc::new(MemoryStore::new()));
        let now = fixed_now();
        let first = store.insert(new_opportunity("l1", "Acme Co"), now).unwrap();
        let second = store.insert(new_opportunity("l1", "Acme Co"), now).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.opportunities().len(), 2);
    }

    #[test]
    fn test_update_merges_and_preserves_absent_fields() {
        let mut store = OpportunitiesStore::new(Arc::new(MemoryStore::new()));
        let created = store.insert(new_opportunity("l1", "Acme Co"), fixed_now()).unwrap();

        let updated = store
            .update(
                &created.id,
                &UpdateOpportunity {
                    stage: Some(OpportunityStage::Negotiation),
                    ..UpdateOpportunity::default()
                },
            )
            .unwrap();

        assert_eq!(updated.stage, OpportunityStage::Negotiation);
        assert_eq!(updated.name, "Acme Co");
        assert_eq!(updated.amount, Some(5000.0));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut store = OpportunitiesStore::new(Arc::new(MemoryStore::new()));
        let err = store
            .update(
                &OpportunityId::new("opp-0").unwrap(),
                &UpdateOpportunity::default(),
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[test]
    fn test_hydrates_collection_from_storage() {
        let raw = r#"[{
            "id": "opp-1714000000000",
            "name": "Acme Co",
            "stage": "proposal",
            "amount": 5000.0,
            "accountName": "Acme Co",
            "createdAt": "2024-05-03T12:00:00Z",
            "originalLeadId": "l1"
        }]"#;
        let storage = Arc::new(MemoryStore::new().with_entry(keys::OPPORTUNITIES, raw));
        let store = OpportunitiesStore::new(storage);

        assert_eq!(store.opportunities().len(), 1);
        let opp = &store.opportunities()[0];
        assert_eq!(opp.stage, OpportunityStage::Proposal);
        assert_eq!(opp.created_at, fixed_now());
    }

    #[test]
    fn test_corrupt_collection_hydrates_empty() {
        let storage =
            Arc::new(MemoryStore::new().with_entry(keys::OPPORTUNITIES, "{definitely broken"));
        let store = OpportunitiesStore::new(storage);
        assert!(store.opportunities().is_empty());
    }

    #[test]
    fn test_failed_persist_leaves_collection_untouched() {
        let mut storage = MockStorage::new();
        // Hydration reads return nothing.
        storage.expect_get().returning(|_| Ok(None));
        storage
            .expect_set()
            .with(predicate::eq(keys::OPPORTUNITIES), predicate::always())
            .returning(|_, _| {
                Err(crate::storage::StorageError::Io(std::io::Error::other(
                    "disk full",
                )))
            });

        let mut store = OpportunitiesStore::new(Arc::new(storage));
        let result = store.insert(new_opportunity("l1", "Acme Co"), fixed_now());
        assert!(result.is_err());
        assert!(store.opportunities().is_empty());
    }

    #[test]
    fn test_view_state_persists() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = OpportunitiesStore::new(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
        store.set_search("acme").unwrap();
        store
            .set_stage_filter(StageFilter::Only(OpportunityStage::Proposal))
            .unwrap();

        let reloaded = OpportunitiesStore::new(storage);
        assert_eq!(reloaded.search(), "acme");
        assert_eq!(
            reloaded.stage_filter(),
            StageFilter::Only(OpportunityStage::Proposal)
        );
    }
}
