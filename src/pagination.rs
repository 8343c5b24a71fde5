//! This module defines the common functionality for paging the expense table.

/// The config for pagination.
#[derive(Debug, Clone, Copy)]
pub struct PaginationConfig {
    /// The number of expenses to display per page.
    pub page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

/// The number of pages needed to display `item_count` items.
///
/// Zero items produce zero pages.
pub fn page_count(item_count: usize, page_size: usize) -> u64 {
    item_count.div_ceil(page_size) as u64
}

/// Clamp a requested page number into the valid range for `page_count` pages.
///
/// Requests outside the range land on the nearest valid page. An empty data
/// set still has a current page of 1 so that the page state is never zero.
pub fn clamp_page(requested_page: u64, page_count: u64) -> u64 {
    requested_page.clamp(1, page_count.max(1))
}

/// The range of page numbers to display around the current page.
///
/// The window covers the current page and up to two neighbours on either
/// side, clamped to the valid page range. Pages near the start show the
/// first five pages and pages near the end show the last five, so the
/// window only shrinks below five entries when there are fewer than five
/// pages. The returned range is empty when there are no pages at all.
pub fn page_window(curr_page: u64, page_count: u64) -> std::ops::RangeInclusive<u64> {
    let curr = curr_page as i64;
    let total = page_count as i64;

    let mut start = (curr - 2).max(1);
    let mut end = (curr + 2).min(total);

    if curr <= 3 {
        end = total.min(5);
    }

    if curr >= total - 2 {
        start = (total - 4).max(1);
    }

    (start as u64)..=(end.max(0) as u64)
}

#[derive(Debug, PartialEq, Eq)]
pub enum PaginationIndicator {
    Page(u64),
    CurrPage(u64),
    NextButton(u64),
    BackButton(u64),
}

pub fn create_pagination_indicators(curr_page: u64, page_count: u64) -> Vec<PaginationIndicator> {
    let map_page = |page| {
        if page == curr_page {
            PaginationIndicator::CurrPage(page)
        } else {
            PaginationIndicator::Page(page)
        }
    };

    let mut indicators: Vec<PaginationIndicator> =
        page_window(curr_page, page_count).map(map_page).collect();

    if curr_page > 1 {
        indicators.insert(0, PaginationIndicator::BackButton(curr_page - 1));
    }

    if curr_page < page_count {
        indicators.push(PaginationIndicator::NextButton(curr_page + 1));
    }

    indicators
}
