//! List-fetch coordination for paginated views.
//!
//! Views do not re-fetch as a side effect of state mutation. They feed
//! [`ListEvent`]s into [`ListState::handle`], which validates the event
//! against the pager and, when accepted, returns the [`FetchSpec`] to
//! issue. Responses come back through [`ListState::apply`] /
//! [`ListState::apply_error`] tagged with the generation from their spec.
//!
//! The generation token is what makes rapid navigation safe: a user
//! clicking next twice issues two fetches, and without ordering guarantees
//! from the transport the older response can resolve last. Only the
//! response whose generation matches the latest issued fetch is applied;
//! everything else is discarded.

use tracing::debug;

use mangust_core::{Page, Pager};

/// An intent event emitted by a paginated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// The user chose a page number.
    PageChanged(u32),
    /// The user chose a page size. Resets to page 1.
    LimitChanged(u32),
    /// The view's filters changed. Resets to page 1 and forgets the total,
    /// which the next response re-establishes.
    FilterChanged,
}

/// A fetch the owning view must issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSpec {
    pub offset: u64,
    pub limit: u32,
    /// Tag to hand back to [`ListState::apply`] with the response.
    pub generation: u64,
}

/// State of one paginated list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pager: Pager,
    items: Vec<T>,
    generation: u64,
}

impl<T> ListState<T> {
    /// Create an empty list with the given page size.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            pager: Pager::new(limit),
            items: Vec::new(),
            generation: 0,
        }
    }

    /// The currently displayed items.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Navigation state for rendering the pagination bar.
    #[must_use]
    pub const fn pager(&self) -> &Pager {
        &self.pager
    }

    /// The fetch for the view's initial mount (or an explicit reload).
    #[must_use]
    pub fn refresh(&mut self) -> FetchSpec {
        self.next_fetch()
    }

    /// Process an intent event.
    ///
    /// Returns the fetch to issue, or `None` when the pager rejected the
    /// event (out-of-range page from stale UI, page size not on offer).
    /// Rejected events leave all state untouched.
    pub fn handle(&mut self, event: ListEvent) -> Option<FetchSpec> {
        let accepted = match event {
            ListEvent::PageChanged(new_page) => self.pager.page_change(new_page),
            ListEvent::LimitChanged(new_limit) => self.pager.limit_change(new_limit),
            ListEvent::FilterChanged => {
                self.pager.reset();
                true
            }
        };
        if !accepted {
            debug!(?event, "rejected pagination event");
            return None;
        }
        Some(self.next_fetch())
    }

    /// Apply a completed fetch.
    ///
    /// Returns `false` and discards the page when `generation` is not the
    /// latest issued - the response was overtaken by a newer fetch.
    pub fn apply(&mut self, generation: u64, page: Page<T>) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                latest = self.generation,
                "discarding stale list response"
            );
            return false;
        }
        self.pager.set_total_items(page.total);
        self.items = page.items;
        true
    }

    /// Record a failed fetch. Prior items stay on screen; the error itself
    /// is the owning view's to display.
    pub fn apply_error(&mut self, generation: u64) {
        if generation != self.generation {
            debug!(
                generation,
                latest = self.generation,
                "ignoring stale list error"
            );
        }
    }

    fn next_fetch(&mut self) -> FetchSpec {
        self.generation += 1;
        let request = self.pager.request();
        FetchSpec {
            offset: request.offset(),
            limit: request.limit(),
            generation: self.generation,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn page(items: Vec<&str>, total: Option<u64>) -> Page<String> {
        Page {
            items: items.into_iter().map(String::from).collect(),
            total,
        }
    }

    #[test]
    fn test_mount_fetch_and_apply() {
        let mut list = ListState::new(10);
        let fetch = list.refresh();
        assert_eq!(fetch.offset, 0);
        assert_eq!(fetch.limit, 10);

        assert!(list.apply(fetch.generation, page(vec!["a", "b"], Some(25))));
        assert_eq!(list.items().len(), 2);
        assert_eq!(list.pager().total_items(), Some(25));
        assert_eq!(list.pager().page_count(), Some(3));
    }

    #[test]
    fn test_page_change_produces_offset() {
        let mut list = ListState::new(10);
        let fetch = list.refresh();
        assert!(list.apply(fetch.generation, page(vec!["a"], Some(25))));

        let fetch = list.handle(ListEvent::PageChanged(3)).unwrap();
        assert_eq!(fetch.offset, 20);
    }

    #[test]
    fn test_out_of_range_page_rejected_without_fetch() {
        let mut list = ListState::new(10);
        let fetch = list.refresh();
        assert!(list.apply(fetch.generation, page(vec!["a"], Some(25))));

        assert!(list.handle(ListEvent::PageChanged(7)).is_none());
        assert_eq!(list.pager().page(), 1);
    }

    #[test]
    fn test_limit_change_resets_page() {
        let mut list = ListState::new(10);
        let fetch = list.refresh();
        assert!(list.apply(fetch.generation, page(vec!["a"], Some(100))));
        list.handle(ListEvent::PageChanged(4)).unwrap();

        let fetch = list.handle(ListEvent::LimitChanged(20)).unwrap();
        assert_eq!(fetch.offset, 0);
        assert_eq!(fetch.limit, 20);
        assert_eq!(list.pager().page(), 1);
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut list = ListState::new(10);
        let first = list.refresh();
        let second = list.handle(ListEvent::PageChanged(2)).unwrap();

        // The newer fetch resolves first.
        assert!(list.apply(second.generation, page(vec!["new"], Some(20))));
        // The overtaken one arrives late and is dropped.
        assert!(!list.apply(first.generation, page(vec!["old"], Some(20))));

        assert_eq!(list.items(), ["new".to_string()]);
    }

    #[test]
    fn test_failed_fetch_keeps_prior_items() {
        let mut list = ListState::new(10);
        let fetch = list.refresh();
        assert!(list.apply(fetch.generation, page(vec!["a", "b"], Some(2))));

        let fetch = list.handle(ListEvent::FilterChanged).unwrap();
        list.apply_error(fetch.generation);
        assert_eq!(list.items().len(), 2);
    }

    #[test]
    fn test_filter_change_forgets_total() {
        let mut list = ListState::new(10);
        let fetch = list.refresh();
        assert!(list.apply(fetch.generation, page(vec!["a"], Some(25))));

        list.handle(ListEvent::FilterChanged).unwrap();
        assert_eq!(list.pager().total_items(), None);
        assert_eq!(list.pager().page(), 1);
    }
}
