//! Pagination arithmetic over a filtered, sorted result set.

use std::ops::Range;

/// Records shown per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` records; 0 when the set is empty.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Index range of 1-based `page` within a set of `len` records.
///
/// The range is clipped to the set bounds, so a page past the end yields an
/// empty range rather than panicking.
pub fn page_bounds(len: usize, page: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(PAGE_SIZE)
        .min(len);
    let end = start.saturating_add(PAGE_SIZE).min(len);
    start..end
}
