use serde::{Deserialize, Serialize};

/// Items shown per page when nothing is persisted yet.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Page strip threshold for the leads table: up to this many pages are shown
/// without ellipsis collapsing.
pub const LEADS_PAGE_WINDOW: usize = 7;

/// Page strip threshold for the opportunities table.
pub const OPPORTUNITIES_PAGE_WINDOW: usize = 5;

/// Persisted pagination parameters shared by both list views.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: usize,
    pub limit: usize,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl PaginationParams {
    /// Replaces out-of-invariant values (`page == 0`, `limit == 0`) with the
    /// defaults; used when hydrating possibly stale persisted state.
    pub fn sanitized(self) -> Self {
        if self.page == 0 || self.limit == 0 {
            Self::default()
        } else {
            self
        }
    }
}

/// Total number of pages for `total_items` at `limit` per page; at least 1.
pub fn total_pages(total_items: usize, limit: usize) -> usize {
    total_items.div_ceil(limit).max(1)
}

/// Computes the page-number strip for a pagination control.
///
/// `None` entries mark a collapsed gap (rendered as an ellipsis). The strip
/// is empty when there is a single page, plain when `total_pages <=
/// max_plain`, and otherwise shows the first page, up to one neighbor on each
/// side of the current page, and the last page.
fn page_numbers(total_pages: usize, current_page: usize, max_plain: usize) -> Vec<Option<usize>> {
    if total_pages <= 1 {
        return vec![];
    }
    if total_pages <= max_plain {
        return (1..=total_pages).map(Some).collect();
    }

    let mut pages = vec![Some(1)];

    let start = current_page.saturating_sub(1).max(2);
    let end = (current_page + 1).min(total_pages - 1);

    if start > 2 {
        pages.push(None);
    }
    pages.extend((start..=end).map(Some));
    if end < total_pages - 1 {
        pages.push(None);
    }

    pages.push(Some(total_pages));
    pages
}

/// One page window over a derived list.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    /// The items of the current page, contiguous in derived order.
    pub items: Vec<T>,
    /// Page-number strip; `None` marks an ellipsis.
    pub pages: Vec<Option<usize>>,
    /// The (clamped) current page.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Paginated<T> {
    /// Slices the derived list into the requested page.
    ///
    /// The page is clamped into `[1, total_pages]`; `limit == 0` is treated
    /// as the default page size.
    pub fn new(derived: Vec<T>, page: usize, limit: usize, max_plain: usize) -> Self {
        let limit = if limit == 0 { DEFAULT_ITEMS_PER_PAGE } else { limit };
        let total_items = derived.len();
        let total_pages = total_pages(total_items, limit);
        let page = page.clamp(1, total_pages);

        let start = (page - 1) * limit;
        let items: Vec<T> = derived
            .into_iter()
            .skip(start)
            .take(limit)
            .collect();

        let pages = page_numbers(total_pages, page, max_plain);

        Self {
            items,
            pages,
            page,
            total_pages,
            total_items,
        }
    }
}
