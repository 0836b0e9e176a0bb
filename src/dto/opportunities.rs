use crate::domain::opportunity::Opportunity;
use crate::filters::StageFilter;
use crate::pagination::Paginated;

/// Data required to render the opportunities table.
pub struct OpportunitiesPageData {
    /// The current page of the derived (searched, stage-filtered) list.
    pub opportunities: Paginated<Opportunity>,
    /// Search string echoed back to the search box when present.
    pub search_query: Option<String>,
    /// The active stage filter, for the filter select.
    pub stage_filter: StageFilter,
}
