//! Fixed-page-size pagination over a cached search result.
//!
//! The pager is a value: `next`/`prev` return a new state instead of
//! mutating shared fields, and [`Pager::render`] produces a descriptor the
//! UI draws from. The offset is always a clamped multiple of the page size.

use storeloc_core::{Store, StoreId};

/// Number of stores shown per page.
pub const PAGE_SIZE: usize = 3;

/// Pagination state over one search result.
#[derive(Debug, Clone, PartialEq)]
pub enum Pager {
    /// No results fetched yet, or the search returned zero stores.
    Empty,
    HasResults { results: Vec<Store>, offset: usize },
}

/// One renderable entry of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry {
    pub store: Store,
    /// Whether this entry is the caller's current store.
    pub selected: bool,
}

/// Render descriptor for the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub entries: Vec<PageEntry>,
    /// One-based display range, e.g. `"4-6"`.
    pub range_label: String,
    pub total: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Pager {
    /// Accepts a fresh search result. Zero results yield [`Pager::Empty`];
    /// otherwise paging starts at the first page.
    #[must_use]
    pub fn receive(results: Vec<Store>) -> Self {
        if results.is_empty() {
            Pager::Empty
        } else {
            Pager::HasResults { results, offset: 0 }
        }
    }

    /// The first-ranked store, used for default selection.
    #[must_use]
    pub fn first_store(&self) -> Option<&Store> {
        match self {
            Pager::Empty => None,
            Pager::HasResults { results, .. } => results.first(),
        }
    }

    /// Advances one page. A no-op on the last page or when empty.
    #[must_use]
    pub fn next(&self) -> Self {
        match self {
            Pager::Empty => Pager::Empty,
            Pager::HasResults { results, offset } => {
                let offset = if offset + PAGE_SIZE < results.len() {
                    offset + PAGE_SIZE
                } else {
                    *offset
                };
                Pager::HasResults {
                    results: results.clone(),
                    offset,
                }
            }
        }
    }

    /// Steps back one page. A no-op on the first page or when empty.
    #[must_use]
    pub fn prev(&self) -> Self {
        match self {
            Pager::Empty => Pager::Empty,
            Pager::HasResults { results, offset } => Pager::HasResults {
                results: results.clone(),
                offset: offset.saturating_sub(PAGE_SIZE),
            },
        }
    }

    /// The current page as a render descriptor, marking the entry whose id
    /// equals `current` as selected. `None` when there is nothing to show.
    #[must_use]
    pub fn render(&self, current: Option<StoreId>) -> Option<PageView> {
        let Pager::HasResults { results, offset } = self else {
            return None;
        };

        let end = (offset + PAGE_SIZE).min(results.len());
        let entries = results[*offset..end]
            .iter()
            .map(|store| PageEntry {
                store: store.clone(),
                selected: current == Some(store.id),
            })
            .collect();

        Some(PageView {
            entries,
            range_label: format!("{}-{}", offset + 1, end),
            total: results.len(),
            has_prev: *offset > 0,
            has_next: offset + PAGE_SIZE < results.len(),
        })
    }
}
