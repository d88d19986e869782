//! Fixed-size pagination over the derived product sequence.

use std::ops::Range;

use crate::config::PageSize;

/// The "Showing first - last of total" window of the current page.
///
/// `first` and `last` are 1-based; both are zero when nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

/// Current page and page size.
///
/// The page is 1-based and, after every [`clamp`](Self::clamp), lies in
/// `1..=max(1, total_pages)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: PageSize,
}

impl Pagination {
    /// Starts on the first page.
    #[must_use]
    pub const fn new(page_size: PageSize) -> Self {
        Self { page: 1, page_size }
    }

    /// Current page, 1-based.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// `ceil(count / page_size)`; zero for an empty list.
    #[must_use]
    pub const fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size.get())
    }

    /// Moves to `page` if it exists for `count` rows.
    ///
    /// Returns `false` and stays put otherwise.
    pub fn go_to(&mut self, page: usize, count: usize) -> bool {
        if page >= 1 && page <= self.total_pages(count) {
            self.page = page;
            true
        } else {
            false
        }
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Pulls the page back into `1..=max(1, total_pages)`.
    pub fn clamp(&mut self, count: usize) {
        let last = self.total_pages(count).max(1);
        if self.page > last {
            tracing::debug!(from = self.page, to = last, "page clamped");
            self.page = last;
        }
        if self.page == 0 {
            self.page = 1;
        }
    }

    /// Index range of the current page within `count` rows.
    #[must_use]
    pub fn range(&self, count: usize) -> Range<usize> {
        let size = self.page_size.get();
        let start = ((self.page - 1) * size).min(count);
        let end = (self.page * size).min(count);
        start..end
    }

    /// Slice of `items` on the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// "Showing a - b of n" numbers for the current page.
    #[must_use]
    pub fn window(&self, count: usize) -> PageWindow {
        let range = self.range(count);
        if range.is_empty() {
            return PageWindow {
                first: 0,
                last: 0,
                total: count,
            };
        }
        PageWindow {
            first: range.start + 1,
            last: range.end,
            total: count,
        }
    }
}
