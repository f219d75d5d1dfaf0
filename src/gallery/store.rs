//! Session state for one gallery session.
//!
//! [`SessionStore`] is the single owner of the current category, page and sort
//! criterion together with the page cache. It performs no I/O; the fetch
//! orchestrator is the only code that writes to its cache or flags.

use crate::domain::{Category, ImageRecord, Page, SortCriterion};
use crate::gallery::cache::{PageCache, ResultSet};
use crate::gallery::fetch::PageKey;
use crate::gallery::sort_view::sorted_view;

/// Below this many items on the current page, "next" is disabled.
pub const NEXT_PAGE_THRESHOLD: usize = 9;

/// Transient state of the active page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionFlags {
    /// A request for the active page is outstanding.
    pub loading: bool,
    /// The active page resolved empty or failed.
    pub exhausted: bool,
}

impl SessionFlags {
    /// Flags for a page whose request is outstanding.
    pub const LOADING: Self = Self {
        loading: true,
        exhausted: false,
    };

    /// Flags for a page that resolved, empty or not.
    #[must_use]
    pub const fn settled(exhausted: bool) -> Self {
        Self {
            loading: false,
            exhausted,
        }
    }
}

/// Current category, page, sort and cache.
#[derive(Debug, Clone)]
pub struct SessionStore {
    category: Category,
    page: Page,
    sort: SortCriterion,
    cache: PageCache,
    flags: SessionFlags,
}

impl SessionStore {
    /// Creates a store positioned on the first page of `category`.
    #[must_use]
    pub fn new(category: Category, sort: SortCriterion) -> Self {
        Self {
            category,
            page: Page::FIRST,
            sort,
            cache: PageCache::new(),
            flags: SessionFlags::default(),
        }
    }

    /// Replaces the category and resets the page to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use zgallery::domain::{Category, Page, SortCriterion};
    /// use zgallery::gallery::SessionStore;
    ///
    /// let mut store = SessionStore::new(Category::new("sport").unwrap(), SortCriterion::Id);
    /// store.next_page();
    /// store.set_category(Category::new("nature").unwrap());
    /// assert_eq!(store.page(), Page::FIRST);
    /// ```
    pub fn set_category(&mut self, category: Category) {
        tracing::debug!(from = %self.category, to = %category, "category changed");
        self.category = category;
        self.page = Page::FIRST;
    }

    /// Replaces the page.
    pub fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    /// Moves to the next page.
    pub fn next_page(&mut self) {
        self.page = self.page.next();
    }

    /// Moves to the previous page. Returns `false` on page 1.
    pub fn prev_page(&mut self) -> bool {
        match self.page.prev() {
            Some(prev) => {
                self.page = prev;
                true
            }
            None => false,
        }
    }

    /// Replaces the sort criterion. Never affects what is loaded.
    pub fn set_sort_criterion(&mut self, sort: SortCriterion) {
        self.sort = sort;
    }

    /// Current category.
    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    /// Current page.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// Current sort criterion.
    #[must_use]
    pub const fn sort_criterion(&self) -> SortCriterion {
        self.sort
    }

    /// Read access to every cached page.
    #[must_use]
    pub const fn cache(&self) -> &PageCache {
        &self.cache
    }

    /// Flags of the active page.
    #[must_use]
    pub const fn flags(&self) -> SessionFlags {
        self.flags
    }

    /// Key of the page currently on screen.
    #[must_use]
    pub fn active_key(&self) -> PageKey {
        PageKey::new(self.category.clone(), self.page)
    }

    /// Whether `key` addresses the page currently on screen.
    #[must_use]
    pub fn is_active(&self, key: &PageKey) -> bool {
        key.category == self.category && key.page == self.page
    }

    /// Cached results of the active page, if loaded.
    #[must_use]
    pub fn active_results(&self) -> Option<&ResultSet> {
        self.cache.get(&self.category, self.page)
    }

    /// Active page in display order. Empty when nothing is loaded.
    #[must_use]
    pub fn sorted_view(&self) -> Vec<&ImageRecord> {
        self.active_results()
            .map(|records| sorted_view(records, self.sort))
            .unwrap_or_default()
    }

    /// Whether "previous" is enabled.
    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.page > Page::FIRST
    }

    /// Whether "next" is enabled.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.active_results()
            .is_some_and(|records| records.len() >= NEXT_PAGE_THRESHOLD)
    }

    pub(crate) fn set_flags(&mut self, flags: SessionFlags) {
        self.flags = flags;
    }

    /// Writes a resolved page into its slot. Returns `false` if the slot was
    /// already filled.
    pub(crate) fn store_results(&mut self, key: PageKey, results: ResultSet) -> bool {
        self.cache.insert(key.category, key.page, results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> SessionStore {
        SessionStore::new(Category::new("sport").unwrap(), SortCriterion::Id)
    }

    fn page_of(n: u32) -> ResultSet {
        (1..=n)
            .map(|id| ImageRecord::from_json(&json!({ "id": id })).unwrap())
            .collect()
    }

    #[test]
    fn category_change_resets_page() {
        let mut store = store();
        store.set_page(Page::new(4).unwrap());
        store.set_category(Category::new("nature").unwrap());
        assert_eq!(store.page(), Page::FIRST);
        assert_eq!(store.category().as_str(), "nature");
    }

    #[test]
    fn prev_page_stops_at_first() {
        let mut store = store();
        assert!(!store.prev_page());
        assert_eq!(store.page(), Page::FIRST);
        store.next_page();
        assert!(store.prev_page());
        assert_eq!(store.page(), Page::FIRST);
    }

    #[test]
    fn pagination_gates_follow_page_and_result_size() {
        let mut store = store();
        assert!(!store.can_go_prev());
        assert!(!store.can_go_next());

        store.store_results(store.active_key(), page_of(9));
        assert!(store.can_go_next());

        store.next_page();
        assert!(store.can_go_prev());
        store.store_results(store.active_key(), page_of(8));
        assert!(!store.can_go_next());
    }

    #[test]
    fn sort_change_leaves_cache_alone() {
        let mut store = store();
        store.store_results(store.active_key(), page_of(3));
        store.set_sort_criterion(SortCriterion::Views);
        assert_eq!(store.cache().len(), 1);
        assert_eq!(store.sorted_view().len(), 3);
        assert_eq!(store.sort_criterion(), SortCriterion::Views);
    }
}
