//! The offset/limit page contract and the pager navigation state machine.
//!
//! Every list view - products, categories, orders, users, wishlist - speaks
//! the same contract: a 1-based `(page, limit)` pair converted to the
//! backend's `(offset, limit)` parameters in exactly one place
//! ([`PageRequest::offset`]), and a [`Page`] of normalized items coming
//! back. [`Pager`] owns the mapping from `(page, limit, total_items)` to
//! renderable navigation state; it validates page changes instead of
//! silently clamping them, so stale UI cannot smuggle an out-of-range page
//! into a fetch.

use serde::{Deserialize, Serialize};

/// Page sizes offered by list views unless a view overrides them.
pub const DEFAULT_LIMIT_OPTIONS: &[u32] = &[5, 10, 20, 50];

/// Width of the sliding page-number window rendered by pagination bars.
const PAGE_WINDOW: u32 = 5;

// =============================================================================
// Request side
// =============================================================================

/// A 1-based page request.
///
/// This is the sole page-to-offset conversion point in the codebase;
/// divergent arithmetic at call sites is the highest-risk bug class in
/// this subsystem, so list endpoints accept a `PageRequest` rather than a
/// raw offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Create a page request. Values below 1 are raised to 1.
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        Self {
            page: if page < 1 { 1 } else { page },
            limit: if limit < 1 { 1 } else { limit },
        }
    }

    /// The 1-based page number.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Items per page.
    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit
    }

    /// The backend offset: `(page - 1) * limit`.
    #[must_use]
    pub const fn offset(self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// One page of normalized items.
///
/// `items` is always a (possibly empty) vector. `total` is `None` when the
/// backend did not report a count; callers treat that as "more pages may
/// exist", not as zero results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
}

impl<T> Page<T> {
    /// An empty page with unknown total.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: None,
        }
    }

    /// Map the items of this page, keeping the total.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// Pager state machine
// =============================================================================

/// An entry in the rendered page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A navigable page number.
    Page(u32),
    /// An ellipsis affordance standing in for skipped pages.
    Ellipsis,
}

/// Navigation state for one list view.
///
/// Owns `(page, limit, total_items)` and derives everything a pagination
/// bar renders. Transitions validate instead of clamping: an out-of-range
/// `page_change` is rejected and the owning view re-derives from fresh
/// data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    limit: u32,
    total_items: Option<u64>,
    limit_options: Vec<u32>,
}

impl Pager {
    /// Create a pager on page 1 with the given page size and the default
    /// limit options. The limit is added to the options if absent so the
    /// current state is always representable.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self::with_options(limit, DEFAULT_LIMIT_OPTIONS.to_vec())
    }

    /// Create a pager with a custom set of allowed page sizes.
    #[must_use]
    pub fn with_options(limit: u32, mut limit_options: Vec<u32>) -> Self {
        let limit = limit.max(1);
        if !limit_options.contains(&limit) {
            limit_options.push(limit);
            limit_options.sort_unstable();
        }
        Self {
            page: 1,
            limit,
            total_items: None,
            limit_options,
        }
    }

    /// The current 1-based page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// The current page size.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// The reported total, when known.
    #[must_use]
    pub const fn total_items(&self) -> Option<u64> {
        self.total_items
    }

    /// Allowed page sizes, for rendering the per-page selector.
    #[must_use]
    pub fn limit_options(&self) -> &[u32] {
        &self.limit_options
    }

    /// The `(page, limit)` pair to fetch with.
    #[must_use]
    pub const fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }

    /// Record the total reported by the latest fetch. `None` means the
    /// backend did not say; navigation stays open-ended.
    pub const fn set_total_items(&mut self, total: Option<u64>) {
        self.total_items = total;
    }

    /// Number of pages, when the total is known and non-zero.
    ///
    /// `None` means "unknown, assume open-ended" - both for an unreported
    /// total and for a reported total of zero (an empty list has no pages
    /// to navigate).
    #[must_use]
    pub fn page_count(&self) -> Option<u32> {
        match self.total_items {
            Some(total) if total > 0 => {
                let limit = u64::from(self.limit);
                let count = total.div_ceil(limit);
                Some(u32::try_from(count).unwrap_or(u32::MAX))
            }
            _ => None,
        }
    }

    /// Whether backward navigation is possible.
    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        if self.total_items == Some(0) {
            return false;
        }
        self.page > 1
    }

    /// Whether forward navigation is possible.
    ///
    /// A known-empty list never pages forward; an unknown total pages
    /// forward optimistically.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        match self.total_items {
            Some(0) => false,
            None => true,
            Some(_) => self.page_count().is_some_and(|count| self.page < count),
        }
    }

    /// Move to `new_page`, if it is in range.
    ///
    /// Returns `false` (leaving state untouched) when `new_page` is 0 or,
    /// with a known page count, beyond it. Callers re-fetch on `true`.
    #[must_use]
    pub fn page_change(&mut self, new_page: u32) -> bool {
        if new_page < 1 {
            return false;
        }
        if let Some(count) = self.page_count()
            && new_page > count
        {
            return false;
        }
        if self.total_items == Some(0) && new_page != 1 {
            return false;
        }
        self.page = new_page;
        true
    }

    /// Switch the page size, if it is one of the allowed options.
    ///
    /// Always resets to page 1 on success: the previous offset is
    /// meaningless under a new limit. Callers re-fetch on `true`.
    #[must_use]
    pub fn limit_change(&mut self, new_limit: u32) -> bool {
        if !self.limit_options.contains(&new_limit) {
            return false;
        }
        self.limit = new_limit;
        self.page = 1;
        true
    }

    /// Return to page 1, keeping the limit. Used when filters change.
    pub const fn reset(&mut self) {
        self.page = 1;
        self.total_items = None;
    }

    /// The page-number strip to render.
    ///
    /// Empty when the page count is unknown. Otherwise a sliding window of
    /// up to [`PAGE_WINDOW`] numbers centered on the current page, clamped
    /// to `[1, page_count]`, with the first and last page always present
    /// (separated by ellipses when pages are skipped).
    #[must_use]
    pub fn window(&self) -> Vec<PageItem> {
        let Some(count) = self.page_count() else {
            return Vec::new();
        };
        if count <= PAGE_WINDOW {
            return (1..=count).map(PageItem::Page).collect();
        }

        let half = PAGE_WINDOW / 2;
        let start = self.page.saturating_sub(half).clamp(1, count - PAGE_WINDOW + 1);
        let end = start + PAGE_WINDOW - 1;

        let mut items = Vec::new();
        if start > 1 {
            items.push(PageItem::Page(1));
            if start > 2 {
                items.push(PageItem::Ellipsis);
            }
        }
        items.extend((start..=end).map(PageItem::Page));
        if end < count {
            if end < count - 1 {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page(count));
        }
        items
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_conversion() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
        assert_eq!(PageRequest::new(5, 7).offset(), 28);
    }

    #[test]
    fn test_page_request_raises_zero_to_one() {
        let req = PageRequest::new(0, 0);
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 1);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_page_count_known_total() {
        let mut pager = Pager::new(10);
        pager.set_total_items(Some(25));
        assert_eq!(pager.page_count(), Some(3));
    }

    #[test]
    fn test_page_count_exact_multiple() {
        let mut pager = Pager::new(10);
        pager.set_total_items(Some(30));
        assert_eq!(pager.page_count(), Some(3));
    }

    #[test]
    fn test_page_count_unknown_total() {
        let pager = Pager::new(10);
        assert_eq!(pager.page_count(), None);
        assert!(pager.can_go_next());
        assert!(!pager.can_go_prev());
    }

    #[test]
    fn test_navigation_bounds() {
        let mut pager = Pager::new(10);
        pager.set_total_items(Some(25));

        assert!(!pager.can_go_prev());
        assert!(pager.can_go_next());

        assert!(pager.page_change(3));
        assert!(pager.can_go_prev());
        assert!(!pager.can_go_next());
    }

    #[test]
    fn test_empty_list_never_navigates() {
        let mut pager = Pager::new(10);
        pager.set_total_items(Some(0));
        assert!(!pager.can_go_prev());
        assert!(!pager.can_go_next());
        assert!(!pager.page_change(2));
    }

    #[test]
    fn test_page_change_rejects_out_of_range() {
        let mut pager = Pager::new(10);
        pager.set_total_items(Some(25));
        assert!(!pager.page_change(0));
        assert!(!pager.page_change(4));
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_page_change_open_ended_when_total_unknown() {
        let mut pager = Pager::new(10);
        assert!(pager.page_change(42));
        assert_eq!(pager.page(), 42);
    }

    #[test]
    fn test_limit_change_resets_page() {
        let mut pager = Pager::new(10);
        pager.set_total_items(Some(100));
        assert!(pager.page_change(4));

        assert!(pager.limit_change(20));
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.limit(), 20);
    }

    #[test]
    fn test_limit_change_rejects_unknown_option() {
        let mut pager = Pager::new(10);
        assert!(!pager.limit_change(13));
        assert_eq!(pager.limit(), 10);
    }

    #[test]
    fn test_window_small_page_count() {
        let mut pager = Pager::new(10);
        pager.set_total_items(Some(30));
        assert_eq!(
            pager.window(),
            vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
        );
    }

    #[test]
    fn test_window_centered_with_ellipses() {
        let mut pager = Pager::new(10);
        pager.set_total_items(Some(100));
        assert!(pager.page_change(5));
        assert_eq!(
            pager.window(),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Page(7),
                PageItem::Ellipsis,
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn test_window_clamped_at_edges() {
        let mut pager = Pager::new(10);
        pager.set_total_items(Some(100));
        assert_eq!(
            pager.window(),
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Ellipsis,
                PageItem::Page(10),
            ]
        );

        assert!(pager.page_change(10));
        assert_eq!(
            pager.window(),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(6),
                PageItem::Page(7),
                PageItem::Page(8),
                PageItem::Page(9),
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn test_window_unknown_total_is_empty() {
        let pager = Pager::new(10);
        assert!(pager.window().is_empty());
    }

    #[test]
    fn test_with_options_includes_current_limit() {
        let pager = Pager::with_options(25, vec![10, 50]);
        assert_eq!(pager.limit_options(), &[10, 25, 50]);
    }

    #[test]
    fn test_page_map_keeps_total() {
        let page = Page {
            items: vec![1, 2, 3],
            total: Some(9),
        };
        let mapped = page.map(|n| n * 2);
        assert_eq!(mapped.items, vec![2, 4, 6]);
        assert_eq!(mapped.total, Some(9));
    }
}
