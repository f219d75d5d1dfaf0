//! Category and page identifiers.
//!
//! A gallery view is addressed by a [`Category`] (topic token sent to the API)
//! and a [`Page`] (1-based page number). Both types enforce their invariants at
//! construction so the rest of the crate never has to re-check them.

use crate::domain::error::{GalleryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Category shown when none is configured.
pub const DEFAULT_CATEGORY: &str = "sport";

/// A non-empty topic token such as `"sport"`.
///
/// The token is kept exactly as committed apart from surrounding whitespace,
/// which is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
    /// Builds a category from raw text.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::InvalidCategory`] if the text is empty or only
    /// whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use zgallery::domain::Category;
    ///
    /// assert_eq!(Category::new("  sport ").unwrap().as_str(), "sport");
    /// assert!(Category::new("   ").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GalleryError::InvalidCategory);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the category token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Category {
    /// [`DEFAULT_CATEGORY`].
    fn default() -> Self {
        Self(DEFAULT_CATEGORY.to_string())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 1-based page number.
///
/// Backed by [`NonZeroU32`], so a page below 1 cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Page(NonZeroU32);

impl Page {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Builds a page from a raw number, rejecting zero.
    #[must_use]
    pub fn new(number: u32) -> Option<Self> {
        NonZeroU32::new(number).map(Self)
    }

    /// Returns the page number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// The page after this one, saturating at `u32::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The page before this one, or `None` on the first page.
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_rejects_blank_input() {
        assert!(matches!(Category::new(""), Err(GalleryError::InvalidCategory)));
        assert!(matches!(Category::new(" \t"), Err(GalleryError::InvalidCategory)));
    }

    #[test]
    fn category_trims_surrounding_whitespace() {
        let category = Category::new(" nature  ").unwrap();
        assert_eq!(category.as_str(), "nature");
        assert_eq!(category.to_string(), "nature");
    }

    #[test]
    fn page_navigation_never_goes_below_one() {
        assert_eq!(Page::FIRST.get(), 1);
        assert_eq!(Page::FIRST.prev(), None);
        assert_eq!(Page::FIRST.next().get(), 2);
        assert_eq!(Page::FIRST.next().prev(), Some(Page::FIRST));
        assert_eq!(Page::new(0), None);
    }
}
