use crate::domain::lead::Lead;
use crate::pagination::Paginated;

/// Data required to render the leads table.
pub struct LeadsPageData {
    /// The current page of the derived (searched, filtered, sorted) list.
    pub leads: Paginated<Lead>,
    /// Search string echoed back to the search box when present.
    pub search_query: Option<String>,
    /// Set when the seed fetch failed; shown in place of the table.
    pub error: Option<String>,
}
