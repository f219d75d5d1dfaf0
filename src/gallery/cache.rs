//! Session-lifetime cache of fetched pages.
//!
//! Entries are append-only: once a (category, page) slot holds a result set it
//! is never replaced, evicted or invalidated. The refusal to overwrite is what
//! makes "fetched at most once per session" checkable at a single point.

use crate::domain::{Category, ImageRecord, Page};
use std::collections::BTreeMap;

/// Ordered records returned for one (category, page).
pub type ResultSet = Vec<ImageRecord>;

/// Category → page → result set.
#[derive(Debug, Clone, Default)]
pub struct PageCache {
    pages: BTreeMap<Category, BTreeMap<Page, ResultSet>>,
}

impl PageCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached result set for a slot.
    #[must_use]
    pub fn get(&self, category: &Category, page: Page) -> Option<&ResultSet> {
        self.pages.get(category).and_then(|pages| pages.get(&page))
    }

    /// Whether a slot has been filled.
    #[must_use]
    pub fn contains(&self, category: &Category, page: Page) -> bool {
        self.get(category, page).is_some()
    }

    /// Fills a slot. Returns `false` and keeps the existing entry if the slot
    /// was already filled.
    pub(crate) fn insert(&mut self, category: Category, page: Page, results: ResultSet) -> bool {
        let pages = self.pages.entry(category).or_default();
        if pages.contains_key(&page) {
            return false;
        }
        pages.insert(page, results);
        true
    }

    /// Number of filled slots across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.values().map(BTreeMap::len).sum()
    }

    /// Whether no slot has been filled yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pages cached for a category, in ascending order.
    pub fn pages_of<'a>(&'a self, category: &Category) -> impl Iterator<Item = Page> + 'a {
        self.pages
            .get(category)
            .into_iter()
            .flat_map(|pages| pages.keys().copied())
    }
}
