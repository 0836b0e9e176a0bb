//! Shared list-view configuration: pagination parameters plus the lead
//! list's status filter and score sort. Every field persists under its own
//! key and is read back on construction.
use std::sync::Arc;

use crate::filters::{LeadFilters, ScoreSort, StatusFilter};
use crate::pagination::PaginationParams;
use crate::storage::{self, KeyValueStore, keys};
use crate::store::errors::{StoreError, StoreResult};

pub struct ConfigStore {
    pagination: PaginationParams,
    status_filter: StatusFilter,
    score_sort: ScoreSort,
    storage: Arc<dyn KeyValueStore>,
}

impl ConfigStore {
    /// Hydrates the configuration from storage, falling back to defaults for
    /// missing or corrupt entries.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let pagination =
            storage::load_json_or_default::<PaginationParams>(storage.as_ref(), keys::PAGINATION)
                .sanitized();
        let status_filter =
            storage::load_json_or_default(storage.as_ref(), keys::LEAD_STATUS_FILTER);
        let score_sort = storage::load_json_or_default(storage.as_ref(), keys::LEAD_SCORE_SORT);

        Self {
            pagination,
            status_filter,
            score_sort,
            storage,
        }
    }

    pub fn pagination(&self) -> PaginationParams {
        self.pagination
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn score_sort(&self) -> ScoreSort {
        self.score_sort
    }

    /// The lead filter tuple, combining this store's settings with the lead
    /// store's search text.
    pub fn lead_filters(&self, search: &str) -> LeadFilters {
        LeadFilters {
            search: search.to_string(),
            status: self.status_filter,
            score_sort: self.score_sort,
        }
    }

    /// Moves to `page`. Requests outside `[1, total_pages]` are a no-op, as
    /// clicking a disabled pagination control is.
    pub fn set_page(&mut self, page: usize, total_pages: usize) -> StoreResult<()> {
        if page < 1 || page > total_pages || page == self.pagination.page {
            return Ok(());
        }
        self.pagination.page = page;
        self.persist_pagination()
    }

    /// Changes the page size; the current page resets to 1.
    pub fn set_limit(&mut self, limit: usize) -> StoreResult<()> {
        if limit == 0 {
            return Err(StoreError::ValidationError(
                "limit must be greater than zero".to_string(),
            ));
        }
        self.pagination = PaginationParams { page: 1, limit };
        self.persist_pagination()
    }

    /// Changes the status filter; the current page resets to 1.
    pub fn set_status_filter(&mut self, filter: StatusFilter) -> StoreResult<()> {
        self.status_filter = filter;
        storage::save_json(self.storage.as_ref(), keys::LEAD_STATUS_FILTER, &filter)?;
        self.reset_page()
    }

    /// Changes the score sort; the current page resets to 1.
    pub fn set_score_sort(&mut self, sort: ScoreSort) -> StoreResult<()> {
        self.score_sort = sort;
        storage::save_json(self.storage.as_ref(), keys::LEAD_SCORE_SORT, &sort)?;
        self.reset_page()
    }

    /// Resets to the first page; used whenever a filter or search changes.
    pub fn reset_page(&mut self) -> StoreResult<()> {
        if self.pagination.page != 1 {
            self.pagination.page = 1;
            self.persist_pagination()?;
        }
        Ok(())
    }

    fn persist_pagination(&self) -> StoreResult<()> {
        storage::save_json(self.storage.as_ref(), keys::PAGINATION, &self.pagination)?;
        Ok(())
    }
}
