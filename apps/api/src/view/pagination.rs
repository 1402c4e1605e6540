use std::ops::Range;

use serde::Serialize;

pub const PAGE_SIZE: usize = 12;
/// Page-number buttons shown around the current page.
pub const PAGE_WINDOW: usize = 5;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub page_numbers: Vec<usize>,
}

impl Pagination {
    /// Builds the pagination for `total_items`, clamping `requested_page`
    /// into the valid range.
    pub fn new(total_items: usize, requested_page: usize) -> Self {
        let total_pages = total_pages(total_items);
        let page = clamp_page(requested_page, total_pages);
        Self {
            page,
            total_pages,
            page_size: PAGE_SIZE,
            total_items,
            has_prev: page > 1,
            has_next: page < total_pages,
            page_numbers: page_window(page, total_pages),
        }
    }

    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * PAGE_SIZE).min(self.total_items);
        let end = (start + PAGE_SIZE).min(self.total_items);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range()]
    }
}

pub fn total_pages(total_items: usize) -> usize {
    total_items.div_ceil(PAGE_SIZE)
}

/// Clamps to `[1, total_pages]`; an empty result set still has page 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Up to `PAGE_WINDOW` consecutive page numbers centred on `page` where possible.
fn page_window(page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let half = PAGE_WINDOW / 2;
    let last_start = total_pages.saturating_sub(PAGE_WINDOW - 1).max(1);
    let start = page.saturating_sub(half).clamp(1, last_start);
    let end = (start + PAGE_WINDOW - 1).min(total_pages);
    (start..=end).collect()
}
