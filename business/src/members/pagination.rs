//! Client-side paging over the filtered member list.
//!
//! Pages are 1-based. An empty list still has one (empty) page.

use std::ops::Range;

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

/// Index of the last page for `count` rows. Never less than 1.
pub fn last_page(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Clamp `page` into `[1, last_page]`.
pub fn clamp_page(page: usize, count: usize, page_size: usize) -> usize {
    page.clamp(1, last_page(count, page_size))
}

/// Row range `[(page-1)*size, page*size)` cut to `count`.
pub fn page_range(page: usize, count: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(count);
    let end = start.saturating_add(page_size).min(count);
    start..end
}

/// Pagination buttons under the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
}

impl PageNav {
    pub const ALL: [Self; 4] = [Self::First, Self::Previous, Self::Next, Self::Last];

    pub fn label(self) -> &'static str {
        match self {
            Self::First => "First",
            Self::Previous => "Previous",
            Self::Next => "Next",
            Self::Last => "Last",
        }
    }

    /// Target page when pressed on `current` with `last` pages available.
    pub fn apply(self, current: usize, last: usize) -> usize {
        let last = last.max(1);
        match self {
            Self::First => 1,
            Self::Previous => current.saturating_sub(1).max(1),
            Self::Next => (current + 1).min(last),
            Self::Last => last,
        }
    }
}
