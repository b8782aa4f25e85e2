//! Pagination over an ordered result list.
//!
//! [`paginate`] never fails: an out-of-range page is clamped into
//! `[1, total_pages]` and the clamped value is reported back in
//! [`Pagination::current_page`]. An empty result list still has one page.

use serde::Serialize;
use std::num::NonZeroUsize;

/// Maximum number of page links shown by [`PageWindow`].
pub const WINDOW_SIZE: usize = 5;

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Metadata describing one page of results.
///
/// Invariants: `total_pages == max(1, ceil(total_results / per_page))` and
/// `1 <= current_page <= total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: usize,
    pub per_page: usize,
    pub total_results: usize,
    pub total_pages: usize,
}

impl Pagination {
    /// Compute metadata for `total_results` items, clamping `page`.
    pub fn new(total_results: usize, page: usize, per_page: NonZeroUsize) -> Self {
        let per_page = per_page.get();
        let total_pages = total_results.div_ceil(per_page).max(1);
        Pagination {
            current_page: page.clamp(1, total_pages),
            per_page,
            total_results,
            total_pages,
        }
    }

    /// Index of the first item on the current page.
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.per_page
    }

    /// Index range of the current page within the full result list.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.offset().min(self.total_results);
        let end = (start + self.per_page).min(self.total_results);
        start..end
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::new(self)
    }
}

/// Slice `results` down to one page.
pub fn paginate<T>(results: &[T], page: usize, per_page: NonZeroUsize) -> (&[T], Pagination) {
    let pagination = Pagination::new(results.len(), page, per_page);
    (&results[pagination.range()], pagination)
}

/// Owned variant of [`paginate`] for callers that already own the result list.
pub fn paginate_vec<T>(mut results: Vec<T>, page: usize, per_page: NonZeroUsize) -> (Vec<T>, Pagination) {
    let pagination = Pagination::new(results.len(), page, per_page);
    let range = pagination.range();
    results.truncate(range.end);
    results.drain(..range.start);
    (results, pagination)
}

// ---------------------------------------------------------------------------
// PageWindow
// ---------------------------------------------------------------------------

/// Navigation view derived from [`Pagination`] for rendering page controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// False when everything fits on one page.
    pub show: bool,
    /// 1-based index of the first result on the page, 0 when there are none.
    pub start_result: usize,
    pub end_result: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_page: Option<usize>,
    pub next_page: Option<usize>,
    /// Up to [`WINDOW_SIZE`] page numbers centred on the current page.
    pub page_numbers: Vec<usize>,
}

impl PageWindow {
    pub fn new(p: &Pagination) -> Self {
        let range = p.range();
        let has_prev = p.current_page > 1;
        let has_next = p.current_page < p.total_pages;

        let mut first = p.current_page.saturating_sub(WINDOW_SIZE / 2).max(1);
        let last = (first + WINDOW_SIZE - 1).min(p.total_pages);
        if last - first + 1 < WINDOW_SIZE && first > 1 {
            first = (last + 1).saturating_sub(WINDOW_SIZE).max(1);
        }

        PageWindow {
            show: p.total_pages > 1,
            start_result: if range.is_empty() { 0 } else { range.start + 1 },
            end_result: range.end,
            has_prev,
            has_next,
            prev_page: has_prev.then(|| p.current_page - 1),
            next_page: has_next.then(|| p.current_page + 1),
            page_numbers: (first..=last).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
