//! Detail dialog state and its focus trap.
//!
//! While the dialog is open, keyboard focus cycles through a fixed ring of
//! controls and never leaves it. Closing hands back the row of the image last
//! shown so the gallery cursor lands on it.

use crate::domain::{ImageRecord, MissingDetailRecord};

/// Fields listed in the dialog, as (label, JSON field).
pub const DETAIL_FIELDS: [(&str, &str); 4] = [
    ("Preview", "previewURL"),
    ("Views", "views"),
    ("Downloads", "downloads"),
    ("Collections", "collections"),
];

/// A focusable control inside the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailControl {
    /// Close the dialog.
    Close,
    /// Show the previous image of the page.
    Previous,
    /// Show the next image of the page.
    Next,
}

impl DetailControl {
    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Close => "Close",
            Self::Previous => "Prev",
            Self::Next => "Next",
        }
    }
}

/// Wrapping cycle of focusable controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRing {
    controls: Vec<DetailControl>,
    index: usize,
}

impl Default for FocusRing {
    fn default() -> Self {
        Self::new(vec![
            DetailControl::Close,
            DetailControl::Previous,
            DetailControl::Next,
        ])
    }
}

impl FocusRing {
    /// Creates a ring focused on its first control.
    ///
    /// An empty list falls back to a ring holding only [`DetailControl::Close`]
    /// so the dialog can always be dismissed.
    #[must_use]
    pub fn new(controls: Vec<DetailControl>) -> Self {
        let controls = if controls.is_empty() {
            vec![DetailControl::Close]
        } else {
            controls
        };
        Self { controls, index: 0 }
    }

    /// Focused control.
    #[must_use]
    pub fn current(&self) -> DetailControl {
        self.controls[self.index]
    }

    /// Controls in ring order.
    #[must_use]
    pub fn controls(&self) -> &[DetailControl] {
        &self.controls
    }

    /// Moves focus forward, wrapping from last to first.
    pub fn focus_next(&mut self) {
        self.index = (self.index + 1) % self.controls.len();
    }

    /// Moves focus backward, wrapping from first to last.
    pub fn focus_prev(&mut self) {
        self.index = self
            .index
            .checked_sub(1)
            .unwrap_or(self.controls.len() - 1);
    }
}

/// Open detail dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    index: usize,
    focus: FocusRing,
}

impl DetailView {
    /// Opens the dialog for the image at `index` of the sorted view.
    ///
    /// # Errors
    ///
    /// Returns [`MissingDetailRecord`] when `record` is `None`; the dialog is
    /// not opened.
    ///
    /// # Examples
    ///
    /// ```
    /// use zgallery::gallery::{DetailControl, DetailView};
    ///
    /// assert!(DetailView::open(None, 0).is_err());
    ///
    /// let record = zgallery::domain::ImageRecord::from_json(&serde_json::json!({"id": 1})).unwrap();
    /// let mut view = DetailView::open(Some(&record), 0).unwrap();
    /// view.focus_prev();
    /// assert_eq!(view.focused(), DetailControl::Next);
    /// ```
    pub fn open(
        record: Option<&ImageRecord>,
        index: usize,
    ) -> std::result::Result<Self, MissingDetailRecord> {
        let record = record.ok_or(MissingDetailRecord)?;
        tracing::debug!(id = %record.id, index = index, "opening detail");
        Ok(Self {
            index,
            focus: FocusRing::default(),
        })
    }

    /// Row of the sorted view being shown.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Focused control.
    #[must_use]
    pub fn focused(&self) -> DetailControl {
        self.focus.current()
    }

    /// The focus ring, for rendering.
    #[must_use]
    pub const fn focus_ring(&self) -> &FocusRing {
        &self.focus
    }

    /// Tab.
    pub fn focus_next(&mut self) {
        self.focus.focus_next();
    }

    /// Shift+Tab.
    pub fn focus_prev(&mut self) {
        self.focus.focus_prev();
    }

    /// Shows the previous image. Returns `false` on the first one.
    pub fn show_previous(&mut self) -> bool {
        match self.index.checked_sub(1) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// Shows the next image out of `len`. Returns `false` on the last one.
    pub fn show_next(&mut self, len: usize) -> bool {
        if self.index + 1 < len {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Closes the dialog, returning the row focus goes back to.
    #[must_use]
    pub fn close(self) -> usize {
        self.index
    }

    /// Label/value pairs for `record`, with `"N/A"` for absent fields.
    #[must_use]
    pub fn fields(record: &ImageRecord) -> Vec<(&'static str, String)> {
        DETAIL_FIELDS
            .iter()
            .map(|(label, field)| (*label, record.display_field(field)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> ImageRecord {
        ImageRecord::from_json(&json!({"id": 5, "views": 12, "previewURL": "https://x/5.png"}))
            .unwrap()
    }

    #[test]
    fn open_without_record_is_refused() {
        assert_eq!(DetailView::open(None, 3), Err(MissingDetailRecord));
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut view = DetailView::open(Some(&record()), 0).unwrap();
        assert_eq!(view.focused(), DetailControl::Close);
        view.focus_next();
        view.focus_next();
        assert_eq!(view.focused(), DetailControl::Next);
        view.focus_next();
        assert_eq!(view.focused(), DetailControl::Close);
        view.focus_prev();
        assert_eq!(view.focused(), DetailControl::Next);
    }

    #[test]
    fn navigation_stays_inside_the_page() {
        let mut view = DetailView::open(Some(&record()), 1).unwrap();
        assert!(view.show_next(3));
        assert!(!view.show_next(3));
        assert!(view.show_previous());
        assert!(view.show_previous());
        assert!(!view.show_previous());
        assert_eq!(view.close(), 0);
    }

    #[test]
    fn close_hands_back_the_row_last_shown() {
        let mut view = DetailView::open(Some(&record()), 2).unwrap();
        view.focus_next();
        assert!(view.show_next(5));
        assert_eq!(view.close(), 3);
    }

    #[test]
    fn fields_fall_back_to_not_available() {
        let fields = DetailView::fields(&record());
        assert_eq!(fields[0], ("Preview", "https://x/5.png".to_string()));
        assert_eq!(fields[1], ("Views", "12".to_string()));
        assert_eq!(fields[2], ("Downloads", "N/A".to_string()));
    }
}
